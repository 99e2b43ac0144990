use crate::error::PlatformError;

/// A document-wide facility that an overlay holds while it is shown.
pub trait GlobalUiResource {
    fn acquire(&mut self) -> Result<(), PlatformError>;
    fn release(&mut self);
}

/// Holds an acquired resource and releases it exactly once, either through
/// `release` or when dropped.
pub struct Claim<R: GlobalUiResource> {
    resource: R,
    held: bool,
}

impl<R: GlobalUiResource> Claim<R> {
    pub fn acquire(mut resource: R) -> Result<Self, PlatformError> {
        resource.acquire()?;
        Ok(Self {
            resource,
            held: true,
        })
    }

    #[cfg(test)]
    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn release(&mut self) {
        if std::mem::take(&mut self.held) {
            self.resource.release();
        }
    }
}

impl<R: GlobalUiResource> Drop for Claim<R> {
    fn drop(&mut self) {
        self.release();
    }
}
