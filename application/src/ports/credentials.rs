//! Credential lookup port

/// External key-value lookup of provider credentials by reference.
///
/// An absent or blank value means the provider is unusable.
pub trait CredentialStore: Send + Sync {
    /// Raw lookup
    fn get(&self, credential_ref: &str) -> Option<String>;

    /// Lookup that treats blank values as absent
    fn resolve(&self, credential_ref: &str) -> Option<String> {
        self.get(credential_ref).filter(|v| !v.trim().is_empty())
    }

    fn contains(&self, credential_ref: &str) -> bool {
        self.resolve(credential_ref).is_some()
    }
}
