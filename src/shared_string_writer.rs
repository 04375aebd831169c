use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;

/// A `fmt::Write` sink whose clones all append to the same buffer, so a
/// tree can own one end as its debug writer while the caller reads the other.
#[derive(Clone, Default)]
pub struct SharedStringWriter(Rc<RefCell<String>>);

impl Write for SharedStringWriter {
    fn write_str(&mut self, s: &str) -> Result<(), std::fmt::Error> {
        self.0.borrow_mut().write_str(s)
    }
}

impl SharedStringWriter {
    pub fn new() -> Self {
        SharedStringWriter::default()
    }

    pub fn borrow<'a>(&'a self) -> std::cell::Ref<'a, String> {
        self.0.borrow()
    }

    /// Returns everything written so far and empties the buffer.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}
