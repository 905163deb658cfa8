/*
[INPUT]:  Primitive field values (strings, numbers, timestamps)
[OUTPUT]: Zero-value detection and wire string formatting
[POS]:    Params layer - per-type marshalling rules
[UPDATE]: When a new field type becomes eligible for marshalling
*/

use chrono::{DateTime, Utc};

/// A field type that can be sent as a request parameter.
///
/// The zero value of a type means "unset": such fields are left out of the
/// request entirely.
pub trait WireValue {
    /// True when the value equals its type's zero value.
    fn is_unset(&self) -> bool;

    /// Wire representation of the value.
    fn to_wire(&self) -> String;
}

impl WireValue for str {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }

    fn to_wire(&self) -> String {
        self.to_string()
    }
}

impl WireValue for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }

    fn to_wire(&self) -> String {
        self.clone()
    }
}

impl<T> WireValue for &T
where
    T: WireValue + ?Sized,
{
    fn is_unset(&self) -> bool {
        (**self).is_unset()
    }

    fn to_wire(&self) -> String {
        (**self).to_wire()
    }
}

macro_rules! impl_wire_value_for_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WireValue for $ty {
                fn is_unset(&self) -> bool {
                    *self == 0
                }

                fn to_wire(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_wire_value_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_wire_value_for_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WireValue for $ty {
                fn is_unset(&self) -> bool {
                    *self == 0.0
                }

                fn to_wire(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_wire_value_for_float!(f32, f64);

/// Timestamps go out as whole seconds since the Unix epoch, truncated toward
/// zero. The epoch itself (`DateTime::<Utc>::default()`) is the zero value.
impl WireValue for DateTime<Utc> {
    fn is_unset(&self) -> bool {
        *self == DateTime::<Utc>::default()
    }

    fn to_wire(&self) -> String {
        // chrono floors; pre-epoch instants with a fraction round up instead
        let seconds = self.timestamp();
        if seconds < 0 && self.timestamp_subsec_nanos() > 0 {
            (seconds + 1).to_string()
        } else {
            seconds.to_string()
        }
    }
}
