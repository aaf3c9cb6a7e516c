//! In-memory persistence for the booking domain.
//!
//! Stands in for a document database: data lives for the process lifetime
//! only. Locks are held for the duration of a single operation and never
//! across an await point.

use mb_core::{Booking, Doctor, Review, User};

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use rand::RngCore;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Salted password hash kept separate from the public user record
#[derive(Debug, Clone)]
struct Credential {
    user_id: Uuid,
    salt: [u8; 16],
    hash: [u8; 32],
}

impl Credential {
    fn new(user_id: Uuid, password: &str) -> Self {
        let mut salt = [0u8; 16];
        rand::rng().fill_bytes(&mut salt);
        let hash = hash_password(&salt, password);
        Self {
            user_id,
            salt,
            hash,
        }
    }

    fn matches(&self, password: &str) -> bool {
        hash_password(&self.salt, password) == self.hash
    }
}

fn hash_password(salt: &[u8; 16], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

#[derive(Default)]
struct StoreInner {
    users: HashMap<Uuid, User>,
    doctors: HashMap<Uuid, Doctor>,
    reviews: HashMap<Uuid, Review>,
    bookings: HashMap<Uuid, Booking>,
    /// Keyed by email
    credentials: HashMap<String, Credential>,
}

/// Thread-safe in-memory store shared across request tasks
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().expect("store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().expect("store lock poisoned")
    }

    // Users -----------------------------------------------------------------

    /// Insert a user with credentials; returns false if the email is taken
    pub fn insert_user(&self, user: User, password: &str) -> bool {
        let mut inner = self.write();
        if inner.credentials.contains_key(&user.email) {
            return false;
        }
        let credential = Credential::new(user.id, password);
        inner.credentials.insert(user.email.clone(), credential);
        inner.users.insert(user.id, user);
        true
    }

    pub fn find_user(&self, id: Uuid) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    pub fn list_users(&self) -> Vec<User> {
        let inner = self.read();
        let mut users: Vec<User> = inner.users.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);
        users
    }

    pub fn update_user_name(&self, id: Uuid, name: String) -> Option<User> {
        let mut inner = self.write();
        let user = inner.users.get_mut(&id)?;
        user.name = name;
        user.updated_at = Utc::now();
        Some(user.clone())
    }

    pub fn delete_user(&self, id: Uuid) -> bool {
        let mut inner = self.write();
        match inner.users.remove(&id) {
            Some(user) => {
                inner.credentials.remove(&user.email);
                true
            }
            None => false,
        }
    }

    /// Look up the user for an email/password pair; None on any mismatch
    pub fn verify_credentials(&self, email: &str, password: &str) -> Option<User> {
        let inner = self.read();
        let credential = inner.credentials.get(email)?;
        if !credential.matches(password) {
            return None;
        }
        inner.users.get(&credential.user_id).cloned()
    }

    // Doctors ---------------------------------------------------------------

    pub fn insert_doctor(&self, doctor: Doctor) {
        self.write().doctors.insert(doctor.id, doctor);
    }

    pub fn find_doctor(&self, id: Uuid) -> Option<Doctor> {
        self.read().doctors.get(&id).cloned()
    }

    pub fn list_doctors(&self) -> Vec<Doctor> {
        let inner = self.read();
        let mut doctors: Vec<Doctor> = inner.doctors.values().cloned().collect();
        doctors.sort_by_key(|d| d.created_at);
        doctors
    }

    pub fn update_doctor(
        &self,
        id: Uuid,
        name: Option<String>,
        specialization: Option<String>,
        bio: Option<String>,
        ticket_price: Option<u32>,
    ) -> Option<Doctor> {
        let mut inner = self.write();
        let doctor = inner.doctors.get_mut(&id)?;
        if let Some(name) = name {
            doctor.name = name;
        }
        if let Some(specialization) = specialization {
            doctor.specialization = specialization;
        }
        if let Some(bio) = bio {
            doctor.bio = Some(bio);
        }
        if let Some(ticket_price) = ticket_price {
            doctor.ticket_price = ticket_price;
        }
        doctor.updated_at = Utc::now();
        Some(doctor.clone())
    }

    pub fn delete_doctor(&self, id: Uuid) -> bool {
        self.write().doctors.remove(&id).is_some()
    }

    // Reviews ---------------------------------------------------------------

    pub fn insert_review(&self, review: Review) {
        self.write().reviews.insert(review.id, review);
    }

    pub fn list_reviews_for_doctor(&self, doctor_id: Uuid) -> Vec<Review> {
        let inner = self.read();
        let mut reviews: Vec<Review> = inner
            .reviews
            .values()
            .filter(|r| r.doctor_id == doctor_id)
            .cloned()
            .collect();
        reviews.sort_by_key(|r| r.created_at);
        reviews
    }

    // Bookings --------------------------------------------------------------

    pub fn insert_booking(&self, booking: Booking) {
        self.write().bookings.insert(booking.id, booking);
    }

    pub fn list_bookings_for_user(&self, user_id: Uuid) -> Vec<Booking> {
        let inner = self.read();
        let mut bookings: Vec<Booking> = inner
            .bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.created_at);
        bookings
    }
}
