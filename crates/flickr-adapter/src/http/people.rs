/*
[INPUT]:  User NSIDs
[OUTPUT]: Person profiles and public contact lists
[POS]:    HTTP layer - flickr.people.* and flickr.contacts.* endpoints
[UPDATE]: When wrapping more people or contacts methods
*/

use serde::Deserialize;

use crate::http::{FlickrClient, Result};
use crate::types::{ContactsGetPublicListParams, ContactsResponse, PeopleGetInfoParams, Person};

const PEOPLE_GET_INFO: &str = "flickr.people.getInfo";
const CONTACTS_GET_PUBLIC_LIST: &str = "flickr.contacts.getPublicList";

#[derive(Debug, Deserialize)]
struct PersonPayload {
    person: Person,
}

#[derive(Debug, Deserialize)]
struct ContactsPayload {
    contacts: ContactsResponse,
}

impl FlickrClient {
    /// Get a user's profile
    ///
    /// GET flickr.people.getInfo
    pub async fn people_get_info(&self, params: PeopleGetInfoParams) -> Result<Person> {
        let payload: PersonPayload = self.call(PEOPLE_GET_INFO, &params, true).await?;
        Ok(payload.person)
    }

    /// Get a user's public contact list
    ///
    /// GET flickr.contacts.getPublicList
    pub async fn contacts_get_public_list(
        &self,
        params: ContactsGetPublicListParams,
    ) -> Result<ContactsResponse> {
        let payload: ContactsPayload = self.call(CONTACTS_GET_PUBLIC_LIST, &params, true).await?;
        Ok(payload.contacts)
    }
}
