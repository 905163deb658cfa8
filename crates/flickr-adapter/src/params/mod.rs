/*
[INPUT]:  Typed parameter structs for each API method
[OUTPUT]: Marshalled ParamSet (wire name -> string value)
[POS]:    Params layer - compile-time mapping from structs to wire parameters
[UPDATE]: When marshalling rules or the wire_params! syntax change
*/

pub mod set;
pub mod value;

pub use set::ParamSet;
pub use value::WireValue;

/// A parameter object that can be marshalled into request parameters.
///
/// Fields holding their zero value are omitted. Implementations are usually
/// generated with [`wire_params!`](crate::wire_params).
pub trait WireParams {
    fn to_wire_params(&self) -> ParamSet;
}

impl WireParams for ParamSet {
    fn to_wire_params(&self) -> ParamSet {
        self.clone()
    }
}

/// Implements [`WireParams`] for a struct by listing its marshalled fields.
///
/// Each field goes out under its own identifier unless a wire name is given
/// with `=> "name"`. Only fields whose types implement [`WireValue`] can be
/// listed; anything else (nested structs, collections) is left out of the
/// mapping.
///
/// ```
/// use flickr_adapter::{wire_params, WireParams};
///
/// #[derive(Default)]
/// struct EchoParams {
///     user_id: String,
///     per_page: u32,
///     text: String,
/// }
///
/// wire_params!(EchoParams {
///     user_id,
///     per_page,
///     text => "q",
/// });
///
/// let params = EchoParams {
///     user_id: "42".into(),
///     text: "owls".into(),
///     ..Default::default()
/// };
/// let wire = params.to_wire_params();
/// assert_eq!(wire.get("user_id"), Some("42"));
/// assert_eq!(wire.get("q"), Some("owls"));
/// assert!(!wire.contains_key("per_page"));
/// ```
#[macro_export]
macro_rules! wire_params {
    (@name $field:ident, $wire:literal) => {
        $wire
    };
    (@name $field:ident) => {
        stringify!($field)
    };
    ($ty:ty { $($field:ident $(=> $wire:literal)?),* $(,)? }) => {
        impl $crate::params::WireParams for $ty {
            fn to_wire_params(&self) -> $crate::params::ParamSet {
                let mut params = $crate::params::ParamSet::new();
                $(
                    params.push_field(
                        $crate::wire_params!(@name $field $(, $wire)?),
                        &self.$field,
                    );
                )*
                params
            }
        }
    };
}
