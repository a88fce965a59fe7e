use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Writer that keeps everything written to it. Clones share the same backing
/// storage, so a scenario can own one end while the test reads the other.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    inner: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let data = self.inner.borrow().clone();
        String::from_utf8(data).expect("Output was invalid utf-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.borrow_mut().flush()
    }
}
