use std::sync::OnceLock;

/// What `with_txn` does with a transaction whose closure returned Ok.
///
/// `RollbackOnOk` lets a test binary run real ledger operations against a
/// shared database without leaving rows behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxnPolicy {
    #[default]
    CommitOnOk,
    RollbackOnOk,
}

static POLICY: OnceLock<TxnPolicy> = OnceLock::new();

/// The process-wide policy; `CommitOnOk` until one is set.
pub fn current() -> TxnPolicy {
    POLICY.get().copied().unwrap_or_default()
}

/// Set the policy for the process. First call wins; later calls are ignored.
pub fn set_txn_policy(policy: TxnPolicy) {
    let _ = POLICY.set(policy);
}
