use soroban_sdk::{contracttype, Address};

/// What a pool accepts as stake.
///
/// `Native` stands in for the network's own currency, which has no token
/// address of its own from the registry's point of view. Its pool still
/// moves funds through the native Stellar Asset Contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Asset {
    Native,
    Token(Address),
}

impl Asset {
    pub fn is_native(&self) -> bool {
        matches!(self, Asset::Native)
    }
}
