//! Dog registry: integer-keyed records with a closed breed enumeration.
//! Keys are assigned here (max existing pk + 1); clients never choose them.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use super::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DogBreed {
    Terrier,
    Bulldog,
    Dalmatian,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub name: String,
    pub pk: i64,
    pub kind: DogBreed,
}

/// Create payload. Has no `pk`: a `pk` key in the request body is dropped by
/// deserialization and never reaches the registry.
#[derive(Debug, Clone, Deserialize)]
pub struct DogCreate {
    pub name: String,
    pub kind: DogBreed,
}

/// Full-replacement payload for update; the path pk is authoritative.
#[derive(Debug, Clone, Deserialize)]
pub struct DogUpdate {
    pub name: String,
    pub kind: DogBreed,
}

impl DogCreate {
    fn into_dog(self, pk: i64) -> Dog {
        Dog {
            name: self.name,
            pk,
            kind: self.kind,
        }
    }
}

impl DogUpdate {
    fn into_dog(self, pk: i64) -> Dog {
        Dog {
            name: self.name,
            pk,
            kind: self.kind,
        }
    }
}

const SEED_DOGS: [(i64, &str, DogBreed); 7] = [
    (0, "Bob", DogBreed::Terrier),
    (1, "Marli", DogBreed::Bulldog),
    (2, "Snoopy", DogBreed::Dalmatian),
    (3, "Rex", DogBreed::Dalmatian),
    (4, "Pongo", DogBreed::Dalmatian),
    (5, "Tillman", DogBreed::Bulldog),
    (6, "Uga", DogBreed::Bulldog),
];

#[derive(Debug)]
pub struct DogRegistry {
    dogs: Mutex<BTreeMap<i64, Dog>>,
}

impl Default for DogRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

impl DogRegistry {
    /// Registry holding the seven fixed startup records (pks 0..=6).
    pub fn seeded() -> Self {
        let dogs = SEED_DOGS
            .iter()
            .map(|&(pk, name, kind)| {
                (
                    pk,
                    Dog {
                        name: name.to_string(),
                        pk,
                        kind,
                    },
                )
            })
            .collect();
        Self {
            dogs: Mutex::new(dogs),
        }
    }

    pub fn empty() -> Self {
        Self {
            dogs: Mutex::new(BTreeMap::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<i64, Dog>>, StoreError> {
        self.dogs
            .lock()
            .map_err(|_| StoreError::Poisoned { store: "dog registry" })
    }

    /// All dogs in ascending pk order, optionally restricted to one breed.
    pub fn list(&self, kind: Option<DogBreed>) -> Result<Vec<Dog>, StoreError> {
        let dogs = self.lock()?;
        Ok(dogs
            .values()
            .filter(|dog| kind.map_or(true, |k| dog.kind == k))
            .cloned()
            .collect())
    }

    pub fn get(&self, pk: i64) -> Result<Dog, StoreError> {
        let dogs = self.lock()?;
        dogs.get(&pk).cloned().ok_or(StoreError::DogNotFound { pk })
    }

    pub fn create(&self, payload: DogCreate) -> Result<Dog, StoreError> {
        let mut dogs = self.lock()?;
        let dog = payload.into_dog(next_pk(&dogs));
        dogs.insert(dog.pk, dog.clone());
        tracing::info!(pk = dog.pk, kind = ?dog.kind, "dog created");
        Ok(dog)
    }

    /// Replaces every non-key field of an existing record. Absent keys are
    /// reported as not found and nothing is inserted.
    pub fn update(&self, pk: i64, payload: DogUpdate) -> Result<Dog, StoreError> {
        let mut dogs = self.lock()?;
        let slot = dogs.get_mut(&pk).ok_or(StoreError::DogNotFound { pk })?;
        *slot = payload.into_dog(pk);
        tracing::info!(pk, kind = ?slot.kind, "dog updated");
        Ok(slot.clone())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.is_empty())
    }
}

fn next_pk(dogs: &BTreeMap<i64, Dog>) -> i64 {
    dogs.keys().next_back().map_or(0, |max| max + 1)
}
