//! A generic CRUD client for one REST resource type.
//!
//! The tracker's server only accepts GET and POST from the client, so
//! creation and deletion travel as POST requests carrying a `_method`
//! override field (`PUT` or `DELETE`). This module builds those requests
//! for any resource type and decodes the `data` payload of successful
//! responses into it.

use std::{marker::PhantomData, sync::Arc};

use serde::de::DeserializeOwned;

use crate::{
    Error,
    transport::{Method, RequestOptions, Transport},
};

/// Alias for the integer type used for resource IDs on the server.
pub type ResourceId = i64;

/// A client for the CRUD operations of one resource type `T`.
///
/// The base URL decides which resource the requests target; the injected
/// [Transport] performs them. Cloning is cheap and shares the transport.
#[derive(Clone)]
pub struct ResourceClient<T> {
    base_url: &'static str,
    transport: Arc<dyn Transport>,
    _resource: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> ResourceClient<T> {
    /// Create a client issuing requests against `base_url`.
    pub fn new(base_url: &'static str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url,
            transport,
            _resource: PhantomData,
        }
    }

    /// Fetch the collection, with `query` sent as query parameters.
    pub async fn list(&self, query: &[(String, String)]) -> Result<Vec<T>, Error> {
        let options = self.list_request(query);
        let url = options.url.clone();
        let payload = self.transport.send(options).await?.into_result()?;

        serde_json::from_value(payload).map_err(|error| Error::InvalidResponse {
            url,
            reason: error.to_string(),
        })
    }

    /// Fetch one item by `id`, with `query` sent as query parameters.
    pub async fn get(&self, id: ResourceId, query: &[(String, String)]) -> Result<T, Error> {
        let options = self.get_request(id, query);
        let url = options.url.clone();
        let payload = self.transport.send(options).await?.into_result()?;

        serde_json::from_value(payload).map_err(|error| Error::InvalidResponse {
            url,
            reason: error.to_string(),
        })
    }

    /// Create an item from `data`, sent as form fields after the
    /// `_method: PUT` override.
    ///
    /// The created item is not returned; callers that need it refresh
    /// their view instead, which is what the pages do anyway.
    pub async fn create(&self, data: &[(String, String)]) -> Result<(), Error> {
        self.transport
            .send(self.create_request(data))
            .await?
            .into_result()?;

        Ok(())
    }

    /// Delete the item with `id`, with extra `data` form fields.
    pub async fn remove(&self, id: ResourceId, data: &[(String, String)]) -> Result<(), Error> {
        self.transport
            .send(self.remove_request(id, data))
            .await?
            .into_result()?;

        Ok(())
    }

    fn list_request(&self, query: &[(String, String)]) -> RequestOptions {
        RequestOptions {
            url: self.base_url.to_owned(),
            method: Method::Get,
            data: query.to_vec(),
        }
    }

    fn get_request(&self, id: ResourceId, query: &[(String, String)]) -> RequestOptions {
        RequestOptions {
            url: format!("{}/{id}", self.base_url),
            method: Method::Get,
            data: query.to_vec(),
        }
    }

    fn create_request(&self, data: &[(String, String)]) -> RequestOptions {
        let mut fields = vec![("_method".to_owned(), "PUT".to_owned())];
        fields.extend_from_slice(data);

        RequestOptions {
            url: self.base_url.to_owned(),
            method: Method::Post,
            data: fields,
        }
    }

    fn remove_request(&self, id: ResourceId, data: &[(String, String)]) -> RequestOptions {
        let mut fields = vec![
            ("_method".to_owned(), "DELETE".to_owned()),
            ("id".to_owned(), id.to_string()),
        ];
        fields.extend_from_slice(data);

        // The original API expects deletions at the trailing-slash URL.
        RequestOptions {
            url: format!("{}/", self.base_url),
            method: Method::Post,
            data: fields,
        }
    }
}
