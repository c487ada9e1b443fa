// Owned handle - release-once wrapper
//
// Vulkan handles must be destroyed exactly once. `Owned` keeps the value
// behind an Option so an explicit release and the later Drop can't both run
// the destroy call.

/// A value paired with the function that releases it.
pub struct Owned<T> {
    value: Option<T>,
    release: fn(T),
}

impl<T> Owned<T> {
    pub fn new(value: T, release: fn(T)) -> Self {
        Self {
            value: Some(value),
            release,
        }
    }

    /// The wrapped value, or None once released.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_released(&self) -> bool {
        self.value.is_none()
    }

    /// Release the value. Returns false if it was already released.
    pub fn release(&mut self) -> bool {
        match self.value.take() {
            Some(value) => {
                (self.release)(value);
                true
            }
            None => false,
        }
    }
}

impl<T> Drop for Owned<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Owned<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Owned").field("value", &self.value).finish()
    }
}
