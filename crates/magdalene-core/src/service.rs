//! Submission handling - the operations behind each form endpoint.

use std::sync::Arc;

use crate::domain::{Booking, Credential, LoginAttempt, PurchaseRequest, QuoteRequest};
use crate::error::DomainError;
use crate::ports::{CredentialRepository, PasswordService, SubmissionRepository};

/// One repository per collection, wired up once at startup.
#[derive(Clone)]
pub struct SubmissionStores {
    pub credentials: Arc<dyn CredentialRepository>,
    pub purchases: Arc<dyn SubmissionRepository<PurchaseRequest>>,
    pub bookings: Arc<dyn SubmissionRepository<Booking>>,
    pub quotes: Arc<dyn SubmissionRepository<QuoteRequest>>,
}

/// Outcome of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    Rejected,
}

/// Persists validated submissions and checks credentials.
///
/// Every method takes an already validated record; request parsing and
/// schema checks happen before a value reaches this type.
pub struct SubmissionService {
    stores: SubmissionStores,
    passwords: Arc<dyn PasswordService>,
}

impl SubmissionService {
    pub fn new(stores: SubmissionStores, passwords: Arc<dyn PasswordService>) -> Self {
        Self { stores, passwords }
    }

    /// True iff a stored credential has exactly this email and its hash
    /// verifies against `password`.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<bool, DomainError> {
        let candidates = self.stores.credentials.find_by_email(email).await?;

        for candidate in &candidates {
            if self.passwords.verify(password, &candidate.password_hash)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    pub async fn login(&self, attempt: &LoginAttempt) -> Result<LoginOutcome, DomainError> {
        if self.authenticate(&attempt.email, &attempt.password).await? {
            Ok(LoginOutcome::Authenticated)
        } else {
            Ok(LoginOutcome::Rejected)
        }
    }

    /// Store a new credential. Existing credentials for the same email are
    /// left alone; duplicates are allowed.
    pub async fn register(&self, attempt: LoginAttempt) -> Result<Credential, DomainError> {
        let password_hash = self.passwords.hash(&attempt.password)?;
        let credential = Credential::new(attempt.email, password_hash);
        Ok(self.stores.credentials.insert(credential).await?)
    }

    pub async fn submit_purchase(
        &self,
        request: PurchaseRequest,
    ) -> Result<PurchaseRequest, DomainError> {
        Ok(self.stores.purchases.insert(request).await?)
    }

    pub async fn submit_booking(&self, booking: Booking) -> Result<Booking, DomainError> {
        Ok(self.stores.bookings.insert(booking).await?)
    }

    pub async fn submit_quote(&self, quote: QuoteRequest) -> Result<QuoteRequest, DomainError> {
        Ok(self.stores.quotes.insert(quote).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::RepoError;
    use crate::ports::AuthError;
    use crate::schema::Document;

    struct VecRepo<T> {
        rows: Mutex<Vec<T>>,
        broken: bool,
    }

    impl<T> Default for VecRepo<T> {
        fn default() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                broken: false,
            }
        }
    }

    impl<T: Clone> VecRepo<T> {
        fn broken() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                broken: true,
            }
        }

        fn rows(&self) -> Vec<T> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl<T: Clone + Send + 'static> SubmissionRepository<T> for VecRepo<T> {
        async fn insert(&self, record: T) -> Result<T, RepoError> {
            if self.broken {
                return Err(RepoError::Connection("down".into()));
            }
            self.rows.lock().unwrap().push(record.clone());
            Ok(record)
        }
    }

    #[async_trait]
    impl CredentialRepository for VecRepo<Credential> {
        async fn find_by_email(&self, email: &str) -> Result<Vec<Credential>, RepoError> {
            Ok(self
                .rows()
                .into_iter()
                .filter(|c| c.email == email)
                .collect())
        }
    }

    /// Reversible stand-in for a real hasher.
    struct PrefixHasher;

    impl PasswordService for PrefixHasher {
        fn hash(&self, password: &str) -> Result<String, AuthError> {
            Ok(format!("hashed:{password}"))
        }

        fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
            Ok(hash.strip_prefix("hashed:") == Some(password))
        }
    }

    struct Fixture {
        service: SubmissionService,
        credentials: Arc<VecRepo<Credential>>,
        quotes: Arc<VecRepo<QuoteRequest>>,
    }

    fn fixture() -> Fixture {
        let credentials = Arc::new(VecRepo::<Credential>::default());
        let quotes = Arc::new(VecRepo::<QuoteRequest>::default());
        let stores = SubmissionStores {
            credentials: credentials.clone(),
            purchases: Arc::new(VecRepo::<PurchaseRequest>::default()),
            bookings: Arc::new(VecRepo::<Booking>::broken()),
            quotes: quotes.clone(),
        };
        Fixture {
            service: SubmissionService::new(stores, Arc::new(PrefixHasher)),
            credentials,
            quotes,
        }
    }

    fn attempt(email: &str, password: &str) -> LoginAttempt {
        LoginAttempt {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_allows_duplicate_emails() {
        let f = fixture();
        f.service.register(attempt("a@b.com", "pw1")).await.unwrap();
        f.service.register(attempt("a@b.com", "pw2")).await.unwrap();

        let rows = f.credentials.rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|c| c.email == "a@b.com"));
        assert!(rows.iter().all(|c| c.password_hash.starts_with("hashed:")));
    }

    #[tokio::test]
    async fn test_authenticate_exact_match_only() {
        let f = fixture();
        f.service.register(attempt("a@b.com", "Secret")).await.unwrap();

        assert!(f.service.authenticate("a@b.com", "Secret").await.unwrap());
        assert!(!f.service.authenticate("a@b.com", "secret").await.unwrap());
        assert!(!f.service.authenticate("A@b.com", "Secret").await.unwrap());
        assert!(!f.service.authenticate("x@b.com", "Secret").await.unwrap());
    }

    #[tokio::test]
    async fn test_authenticate_checks_every_duplicate() {
        let f = fixture();
        f.service.register(attempt("a@b.com", "old")).await.unwrap();
        f.service.register(attempt("a@b.com", "new")).await.unwrap();

        assert!(f.service.authenticate("a@b.com", "old").await.unwrap());
        assert!(f.service.authenticate("a@b.com", "new").await.unwrap());
    }

    #[tokio::test]
    async fn test_login_does_not_store_anything() {
        let f = fixture();
        f.service.register(attempt("a@b.com", "pw")).await.unwrap();

        let outcome = f.service.login(&attempt("a@b.com", "pw")).await.unwrap();
        assert_eq!(outcome, LoginOutcome::Authenticated);
        let outcome = f.service.login(&attempt("a@b.com", "nope")).await.unwrap();
        assert_eq!(outcome, LoginOutcome::Rejected);
        assert_eq!(f.credentials.rows().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_quote_stores_one_record() {
        let f = fixture();
        let doc = Document::new()
            .with("name", Some("A"))
            .with("email", Some("a@b.com"))
            .with("phone", Some("123"))
            .with("service", Some("web"))
            .with("quantity", Some(2.0))
            .with("budget", Some("$1000-$5000"))
            .with("timeline", Some("2w"));
        let quote = QuoteRequest::try_from(doc).unwrap();

        let stored = f.service.submit_quote(quote).await.unwrap();
        assert_eq!(f.quotes.rows().len(), 1);
        assert_eq!(f.quotes.rows()[0].id, stored.id);
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces() {
        let f = fixture();
        let doc = Document::new()
            .with("name", Some("G"))
            .with("email", Some("g@b.com"))
            .with("selectaservice", Some("Vacuum Cleaning"))
            .with("date", Some("tomorrow"))
            .with("specialrequest", Some("none"));
        let booking = Booking::try_from(doc).unwrap();

        let err = f.service.submit_booking(booking).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(RepoError::Connection(_))));
    }
}
