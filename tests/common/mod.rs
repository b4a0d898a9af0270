//! Shared test doubles for the workflow tests.
//!
//! Every double appends to a shared call log so tests can assert the
//! exact collaborator sequence the coordinator drives.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, TxHash};
use metrics::{Counter, Gauge, GaugeFn, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit};
use async_trait::async_trait;
use tokio::sync::oneshot;

use transfer_coordinator::registry::{
    PendingPublication, Publication, RegistryError, TransferRegistry,
};
use transfer_coordinator::session::Session;
use transfer_coordinator::store::{
    DocumentStore, MemoryDocumentStore, ReferenceEntry, StoreError, TransactionRecord, UserRecord,
};
use transfer_coordinator::wallet::{TransferParams, WalletError, WalletProvider};

pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Hash the mock registry reports for the publication.
pub fn publication_tx_hash() -> TxHash {
    TxHash::repeat_byte(0x99)
}

/// Wallet double with a fixed account list.
pub struct MockWallet {
    accounts: Vec<Address>,
    log: CallLog,
    pub last_transfer: Mutex<Option<TransferParams>>,
}

impl MockWallet {
    pub fn new(accounts: Vec<Address>, log: CallLog) -> Self {
        Self {
            accounts,
            log,
            last_transfer: Mutex::new(None),
        }
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.log.lock().unwrap().push("wallet.request_accounts".to_string());
        Ok(self.accounts.clone())
    }

    async fn authorized_accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.log.lock().unwrap().push("wallet.authorized_accounts".to_string());
        Ok(self.accounts.clone())
    }

    async fn send_transfer(&self, transfer: TransferParams) -> Result<TxHash, WalletError> {
        self.log.lock().unwrap().push("wallet.send_transfer".to_string());
        *self.last_transfer.lock().unwrap() = Some(transfer);
        Ok(TxHash::repeat_byte(0x77))
    }
}

/// What the next pending publication's `wait` should do.
pub enum WaitPlan {
    Succeed,
    Fail,
    /// Suspend until the sender side fires.
    Block(oneshot::Receiver<()>),
}

/// Registry double handing out scripted pending publications.
pub struct MockRegistry {
    log: CallLog,
    plans: Mutex<Vec<WaitPlan>>,
    pub last_publication: Mutex<Option<Publication>>,
    session: Mutex<Option<Arc<Session>>>,
}

impl MockRegistry {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            plans: Mutex::new(Vec::new()),
            last_publication: Mutex::new(None),
            session: Mutex::new(None),
        }
    }

    /// Script the next publication's wait behavior (default: succeed).
    pub fn plan(&self, plan: WaitPlan) {
        self.plans.lock().unwrap().push(plan);
    }

    /// Let pending publications record the session's loading flag at wait
    /// time.
    pub fn observe_session(&self, session: Arc<Session>) {
        *self.session.lock().unwrap() = Some(session);
    }
}

#[async_trait]
impl TransferRegistry for MockRegistry {
    async fn publish(
        &self,
        publication: Publication,
    ) -> Result<Box<dyn PendingPublication>, RegistryError> {
        self.log.lock().unwrap().push("registry.publish".to_string());
        *self.last_publication.lock().unwrap() = Some(publication);

        let plan = self.plans.lock().unwrap().pop().unwrap_or(WaitPlan::Succeed);
        Ok(Box::new(MockPending {
            log: self.log.clone(),
            plan,
            session: self.session.lock().unwrap().clone(),
        }))
    }
}

struct MockPending {
    log: CallLog,
    plan: WaitPlan,
    session: Option<Arc<Session>>,
}

#[async_trait]
impl PendingPublication for MockPending {
    fn tx_hash(&self) -> TxHash {
        publication_tx_hash()
    }

    async fn wait(self: Box<Self>) -> Result<(), RegistryError> {
        let entry = match &self.session {
            Some(session) => format!("pending.wait loading={}", session.snapshot().loading),
            None => "pending.wait".to_string(),
        };
        self.log.lock().unwrap().push(entry);

        match self.plan {
            WaitPlan::Succeed => Ok(()),
            WaitPlan::Fail => Err(RegistryError::Reverted("simulated revert".to_string())),
            WaitPlan::Block(gate) => {
                gate.await.ok();
                Ok(())
            }
        }
    }
}

/// Metrics recorder capturing gauge values set through the facade.
///
/// Counters and histograms stay no-ops; tests only assert on gauges.
pub struct GaugeCapture {
    gauges: Arc<Mutex<HashMap<String, f64>>>,
}

impl GaugeCapture {
    pub fn new() -> Self {
        Self {
            gauges: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.gauges.lock().unwrap().get(name).copied()
    }
}

struct CapturedGauge {
    name: String,
    gauges: Arc<Mutex<HashMap<String, f64>>>,
}

impl GaugeFn for CapturedGauge {
    fn increment(&self, value: f64) {
        *self.gauges.lock().unwrap().entry(self.name.clone()).or_insert(0.0) += value;
    }

    fn decrement(&self, value: f64) {
        *self.gauges.lock().unwrap().entry(self.name.clone()).or_insert(0.0) -= value;
    }

    fn set(&self, value: f64) {
        self.gauges.lock().unwrap().insert(self.name.clone(), value);
    }
}

impl Recorder for GaugeCapture {
    fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
    fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
    fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

    fn register_counter(&self, _: &Key, _: &Metadata<'_>) -> Counter {
        Counter::noop()
    }

    fn register_gauge(&self, key: &Key, _: &Metadata<'_>) -> Gauge {
        Gauge::from_arc(Arc::new(CapturedGauge {
            name: key.name().to_string(),
            gauges: self.gauges.clone(),
        }))
    }

    fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
        Histogram::noop()
    }
}

/// Store double logging calls and delegating to the in-memory backend.
pub struct RecordingStore {
    pub inner: MemoryDocumentStore,
    log: CallLog,
}

impl RecordingStore {
    pub fn new(log: CallLog) -> Self {
        Self {
            inner: MemoryDocumentStore::new(),
            log,
        }
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn upsert_user(&self, user: UserRecord) -> Result<(), StoreError> {
        self.log.lock().unwrap().push("store.upsert_user".to_string());
        self.inner.upsert_user(user).await
    }

    async fn upsert_transaction(&self, record: TransactionRecord) -> Result<(), StoreError> {
        self.log.lock().unwrap().push("store.upsert_transaction".to_string());
        self.inner.upsert_transaction(record).await
    }

    async fn append_transaction_ref(
        &self,
        user_address: &str,
        entry: ReferenceEntry,
    ) -> Result<(), StoreError> {
        self.log.lock().unwrap().push("store.append_transaction_ref".to_string());
        self.inner.append_transaction_ref(user_address, entry).await
    }
}
