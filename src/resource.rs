//! Generic mapping from resource types onto REST endpoints.

use std::marker::PhantomData;

use derive_more::Display;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::{Client, Error, Result};

/// Server-assigned numeric identifier.
pub type Id = u64;

/// One of the five CRUD operations.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    #[display(fmt = "list")]
    List,
    #[display(fmt = "get")]
    Get,
    #[display(fmt = "create")]
    Create,
    #[display(fmt = "update")]
    Update,
    #[display(fmt = "delete")]
    Delete,
}

/// Which CRUD operations the upstream API offers for a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub list: bool,
    pub get: bool,
    pub create: bool,
    pub update: bool,
    pub delete: bool,
}

impl Capabilities {
    pub const ALL: Capabilities = Capabilities {
        list: true,
        get: true,
        create: true,
        update: true,
        delete: true,
    };

    pub const NONE: Capabilities = Capabilities {
        list: false,
        get: false,
        create: false,
        update: false,
        delete: false,
    };

    /// Copy of `self` with `operation` disabled.
    pub const fn without(self, operation: Operation) -> Self {
        Capabilities {
            list: self.list && !matches!(operation, Operation::List),
            get: self.get && !matches!(operation, Operation::Get),
            create: self.create && !matches!(operation, Operation::Create),
            update: self.update && !matches!(operation, Operation::Update),
            delete: self.delete && !matches!(operation, Operation::Delete),
        }
    }

    pub const fn supports(self, operation: Operation) -> bool {
        match operation {
            Operation::List => self.list,
            Operation::Get => self.get,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }
}

/// The resource a nested type is created under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent {
    pub name: &'static str,
    pub collection: &'static str,
}

impl Parent {
    pub const fn of<P: Resource>() -> Parent {
        Parent {
            name: P::NAME,
            collection: P::COLLECTION,
        }
    }

    /// Key in a create payload that holds the parent's id, e.g. `project_id`.
    pub fn id_key(&self) -> String {
        format!("{}_id", self.name)
    }
}

/// A typed projection of one remote JSON object.
///
/// Implementors describe where the resource lives and what the API lets callers do with it;
/// the CRUD plumbing itself is provided by [`Resources`] and the default methods below.
pub trait Resource: Serialize + DeserializeOwned {
    /// Singular name, e.g. `project`.
    const NAME: &'static str;
    /// Collection path segment without slashes, e.g. `projects`.
    const COLLECTION: &'static str;
    /// Set for types that are created under another resource.
    const PARENT: Option<Parent> = None;
    /// Fields accepted in update payloads. Everything else is dropped before sending.
    const EDITABLE_FIELDS: &'static [&'static str] = &[];
    const CAPABILITIES: Capabilities = Capabilities::ALL;

    fn id(&self) -> Option<Id>;

    /// Collection endpoint, e.g. `projects/`.
    fn endpoint() -> String {
        format!("{}/", Self::COLLECTION)
    }

    fn require_id(&self) -> Result<Id> {
        self.id().ok_or(Error::InvalidId {
            resource: Self::NAME,
        })
    }

    /// Re-fetch this resource and overwrite the local copy.
    fn refresh(&mut self, client: &Client) -> Result<()> {
        let id = self.require_id()?;
        *self = client.resource::<Self>().get(id)?;
        Ok(())
    }

    /// Push the editable fields of the local copy upstream and replace it with the server's
    /// answer.
    fn save(&mut self, client: &Client) -> Result<()> {
        let id = self.require_id()?;
        *self = client.resource::<Self>().update(id, &*self)?;
        Ok(())
    }

    fn delete(&self, client: &Client) -> Result<()> {
        let id = self.require_id()?;
        client.resource::<Self>().delete(id)
    }

    /// List the `C` records nested under this resource: GET `<endpoint><id>/<children>`.
    fn children<C: Resource>(&self, client: &Client) -> Result<Vec<C>> {
        let id = self.require_id()?;
        let path = format!("{}{}/{}", Self::endpoint(), id, C::COLLECTION);
        client.send(Method::GET, &path, None)?.into_list()
    }
}

/// Keep only the keys of `data` that `R` allows in update payloads.
pub fn editable_payload<R: Resource>(data: &impl Serialize) -> Result<Map<String, Value>> {
    let Value::Object(fields) = serde_json::to_value(data)? else {
        return Err(Error::InvalidPayload);
    };
    Ok(fields
        .into_iter()
        .filter(|(key, _)| R::EDITABLE_FIELDS.contains(&key.as_str()))
        .collect())
}

/// Parent ids end up in the request path, so only plain unsigned integers (as a JSON number or
/// a decimal string) are accepted.
fn parse_parent_id(value: &Value) -> Option<Id> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) if s.bytes().all(|b| b.is_ascii_digit()) => s.parse().ok(),
        _ => None,
    }
}

/// CRUD operations on the `R` collection.
///
/// Obtained from [`Client::resource`] or one of the typed shortcuts such as
/// [`Client::projects`].
pub struct Resources<'c, R> {
    client: &'c Client,
    _resource: PhantomData<fn() -> R>,
}

impl<'c, R: Resource> Resources<'c, R> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Resources {
            client,
            _resource: PhantomData,
        }
    }

    fn ensure(&self, operation: Operation) -> Result<()> {
        if R::CAPABILITIES.supports(operation) {
            Ok(())
        } else {
            Err(Error::Unsupported {
                resource: R::NAME,
                operation,
            })
        }
    }

    /// GET the whole collection.
    pub fn list(&self) -> Result<Vec<R>> {
        self.ensure(Operation::List)?;
        self.client
            .send(Method::GET, &R::endpoint(), None)?
            .into_list()
    }

    /// GET one record by id.
    pub fn get(&self, id: Id) -> Result<R> {
        self.ensure(Operation::Get)?;
        self.client
            .send(Method::GET, &format!("{}{}", R::endpoint(), id), None)?
            .into_single()
    }

    /// Fetch several records, one request per id, stopping at the first failure.
    pub fn get_many(&self, ids: &[Id]) -> Result<Vec<R>> {
        ids.iter().map(|&id| self.get(id)).collect()
    }

    /// POST a new record and return it with its server-assigned id.
    ///
    /// Nested types are created under their parent, whose id is read from the `<parent>_id`
    /// key of `data`.
    pub fn create(&self, data: &impl Serialize) -> Result<R> {
        self.ensure(Operation::Create)?;
        let body = serde_json::to_value(data)?;
        if !body.is_object() {
            return Err(Error::InvalidPayload);
        }

        let path = match R::PARENT {
            None => R::endpoint(),
            Some(parent) => {
                let key = parent.id_key();
                let parent_id = match body.get(&key) {
                    None | Some(Value::Null) => {
                        return Err(Error::MissingParentId {
                            resource: R::NAME,
                            key,
                        })
                    }
                    Some(value) => parse_parent_id(value).ok_or_else(|| {
                        Error::InvalidParentId {
                            resource: R::NAME,
                            key: key.clone(),
                            value: value.to_string(),
                        }
                    })?,
                };
                format!("{}/{}/{}", parent.collection, parent_id, R::endpoint())
            }
        };

        self.client
            .send(Method::POST, &path, Some(&body))?
            .into_single()
    }

    /// PUT the editable subset of `data` and return the updated record.
    pub fn update(&self, id: Id, data: &impl Serialize) -> Result<R> {
        self.ensure(Operation::Update)?;
        let body = Value::Object(editable_payload::<R>(data)?);
        self.client
            .send(Method::PUT, &format!("{}{}", R::endpoint(), id), Some(&body))?
            .into_single()
    }

    pub fn delete(&self, id: Id) -> Result<()> {
        self.ensure(Operation::Delete)?;
        self.client
            .send::<Value>(Method::DELETE, &format!("{}{}", R::endpoint(), id), None)?;
        Ok(())
    }
}
