//! Sample person model and store.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A person in the sample domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonModel {
    /// The person's id, allocated by the store.
    pub id: u64,
    /// The person's first name.
    pub first_name: String,
    /// The person's last name.
    pub last_name: String,
    /// Job title translations keyed by primary language subtag.
    pub job_title: BTreeMap<String, String>,
    /// The person's email.
    pub email: String,
    /// The person's postal address.
    pub address: String,
    /// The person's birth date.
    pub birth_date: NaiveDate,
    /// Whether the email address has been verified.
    pub email_verified: bool,
    /// The id of the person's spouse, if married.
    pub spouse_id: Option<u64>,
}

impl PersonModel {
    /// The person's full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The data needed to create or update a person.
#[derive(Debug, Clone)]
pub struct PersonData {
    pub first_name: String,
    pub last_name: String,
    pub job_title: BTreeMap<String, String>,
    pub email: String,
    pub address: String,
    pub birth_date: NaiveDate,
    pub email_verified: bool,
    pub spouse_id: Option<u64>,
}

/// In-memory person store: concurrent reads, atomic insert/update/remove
/// keyed by id. A stand-in for a real persistence layer.
#[derive(Debug, Default)]
pub struct PersonStore {
    persons: RwLock<BTreeMap<u64, PersonModel>>,
    next_id: AtomicU64,
}

impl PersonStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with sample people.
    pub fn seeded() -> Self {
        let store = Self::new();
        for data in seed_people() {
            store.create(data);
        }
        store
    }

    /// Add a new person, allocating its id.
    #[instrument(skip(self, data), fields(first_name = %data.first_name))]
    pub fn create(&self, data: PersonData) -> PersonModel {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let person = PersonModel {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            job_title: data.job_title,
            email: data.email,
            address: data.address,
            birth_date: data.birth_date,
            email_verified: data.email_verified,
            spouse_id: data.spouse_id,
        };
        self.write_lock().insert(id, person.clone());
        debug!(id, "created person");
        person
    }

    /// The person with the given id, if present.
    pub fn get(&self, id: u64) -> Option<PersonModel> {
        self.read_lock().get(&id).cloned()
    }

    /// Total number of people.
    pub fn count(&self) -> usize {
        self.read_lock().len()
    }

    /// One page of people in id order, plus the total count.
    pub fn page(&self, page_number: usize, per_page: usize) -> (Vec<PersonModel>, usize) {
        let persons = self.read_lock();
        let total = persons.len();
        let skip = page_number.saturating_sub(1).saturating_mul(per_page);
        let items = persons.values().skip(skip).take(per_page).cloned().collect();
        (items, total)
    }

    /// Replace the person with the given id, if present.
    #[instrument(skip(self, data))]
    pub fn update(&self, id: u64, data: PersonData) -> Option<PersonModel> {
        let mut persons = self.write_lock();
        let person = persons.get_mut(&id)?;
        *person = PersonModel {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            job_title: data.job_title,
            email: data.email,
            address: data.address,
            birth_date: data.birth_date,
            email_verified: data.email_verified,
            spouse_id: data.spouse_id,
        };
        debug!(id, "updated person");
        Some(person.clone())
    }

    /// Remove the person with the given id, returning it if present.
    #[instrument(skip(self))]
    pub fn remove(&self, id: u64) -> Option<PersonModel> {
        let removed = self.write_lock().remove(&id);
        if removed.is_some() {
            debug!(id, "removed person");
        }
        removed
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<u64, PersonModel>> {
        self.persons.read().expect("person store lock poisoned")
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<u64, PersonModel>> {
        self.persons.write().expect("person store lock poisoned")
    }
}

fn job_title(en: &str, es: &str) -> BTreeMap<String, String> {
    BTreeMap::from([("en".to_string(), en.to_string()), ("es".to_string(), es.to_string())])
}

fn seed_people() -> Vec<PersonData> {
    vec![
        PersonData {
            first_name: "Alva".into(),
            last_name: "Ferreira".into(),
            job_title: job_title("Software Architect", "Arquitecta de Software"),
            email: "alva.ferreira@example.com".into(),
            address: "12 Rua das Flores, Lisbon".into(),
            birth_date: NaiveDate::from_ymd_opt(1984, 3, 12).expect("valid seed date"),
            email_verified: true,
            spouse_id: Some(1),
        },
        PersonData {
            first_name: "Noor".into(),
            last_name: "Haddad".into(),
            job_title: job_title("Data Engineer", "Ingeniera de Datos"),
            email: "noor.haddad@example.com".into(),
            address: "88 Corniche Road, Beirut".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 11, 2).expect("valid seed date"),
            email_verified: true,
            spouse_id: Some(0),
        },
        PersonData {
            first_name: "Tomás".into(),
            last_name: "Rey".into(),
            job_title: job_title("Technical Writer", "Redactor Técnico"),
            email: "tomas.rey@example.com".into(),
            address: "5 Calle Mayor, Madrid".into(),
            birth_date: NaiveDate::from_ymd_opt(1977, 6, 30).expect("valid seed date"),
            email_verified: false,
            spouse_id: None,
        },
        PersonData {
            first_name: "Ida".into(),
            last_name: "Sorensen".into(),
            job_title: job_title("Product Manager", "Gerente de Producto"),
            email: "ida.sorensen@example.com".into(),
            address: "3 Nyhavn, Copenhagen".into(),
            birth_date: NaiveDate::from_ymd_opt(1988, 1, 19).expect("valid seed date"),
            email_verified: true,
            spouse_id: None,
        },
        PersonData {
            first_name: "Kenji".into(),
            last_name: "Mori".into(),
            job_title: job_title("Site Reliability Engineer", "Ingeniero de Fiabilidad"),
            email: "kenji.mori@example.com".into(),
            address: "7-1 Ginza, Tokyo".into(),
            birth_date: NaiveDate::from_ymd_opt(1995, 9, 8).expect("valid seed date"),
            email_verified: false,
            spouse_id: None,
        },
    ]
}
