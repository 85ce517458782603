//! Mutable-cell capability surface consumed by the codec.

use std::cell::RefCell;
use std::rc::Rc;

use crate::value::PropValue;

/// Capability set the codec needs from a reactive cell: read the current
/// value without subscribing, and overwrite it.
///
/// The codec never constructs cells on its own. Decoding a document that
/// contains signal envelopes goes through a caller-supplied factory, so cell
/// creation policy (plain cell, framework-wired signal) stays with the
/// caller.
pub trait SignalCell {
    /// Current value, read without establishing a subscription.
    fn peek(&self) -> PropValue;

    /// Replaces the current value.
    fn set(&self, value: PropValue);
}

/// Shared handle to a cell.
///
/// Cloning the handle shares the cell; serializer deduplication is by cell
/// allocation, not by handle.
pub type SignalRef = Rc<dyn SignalCell>;

/// Zero-argument cell constructor supplied to the deserializer. Called once
/// per wire index on first reference.
pub type SignalFactory<'a> = dyn FnMut() -> SignalRef + 'a;

/// Plain `RefCell`-backed cell for callers without a reactive framework.
pub struct Signal {
    value: RefCell<PropValue>,
}

impl Signal {
    /// Creates a cell holding `value` and returns a shared handle to it.
    pub fn new(value: PropValue) -> SignalRef {
        Rc::new(Signal {
            value: RefCell::new(value),
        })
    }
}

impl SignalCell for Signal {
    fn peek(&self) -> PropValue {
        self.value.borrow().clone()
    }

    fn set(&self, value: PropValue) {
        *self.value.borrow_mut() = value;
    }
}
