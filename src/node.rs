use crate::handle::Link;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) next: Link,
}

impl<T> Node<T> {
    /// Is this node live (not retired by a removal)?
    pub(crate) fn is_live(&self) -> bool {
        self.value.is_some()
    }
}
