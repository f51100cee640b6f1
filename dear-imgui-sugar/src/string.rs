//! Scratch buffers for staging C strings
//!
//! Widget labels and IDs cross the FFI boundary as NUL-terminated C strings.
//! [`UiBuffer`] is the internal scratch buffer [`Ui`](crate::Ui) methods use
//! to stage them without allocating per call.

/// Internal buffer for UI string operations
#[derive(Debug)]
pub struct UiBuffer {
    buffer: Vec<u8>,
    max_len: usize,
}

impl UiBuffer {
    /// Creates a new buffer with the specified capacity
    pub const fn new(max_len: usize) -> Self {
        Self {
            buffer: Vec::new(),
            max_len,
        }
    }

    /// Pushes a single text to the scratch buffer and returns its pointer.
    pub fn scratch_txt(&mut self, txt: impl AsRef<str>) -> *const std::os::raw::c_char {
        self.refresh_buffer();
        let start_of_substr = self.push(txt);
        unsafe { self.offset(start_of_substr) }
    }

    /// Same as [`Self::scratch_txt`], but `None` maps to a null pointer.
    pub fn scratch_txt_opt(&mut self, txt: Option<impl AsRef<str>>) -> *const std::os::raw::c_char {
        match txt {
            Some(v) => self.scratch_txt(v),
            None => std::ptr::null(),
        }
    }

    /// Same as [`Self::scratch_txt`] but for two strings that must stay valid
    /// together.
    pub fn scratch_txt_two(
        &mut self,
        txt_0: impl AsRef<str>,
        txt_1: impl AsRef<str>,
    ) -> (*const std::os::raw::c_char, *const std::os::raw::c_char) {
        self.refresh_buffer();
        let first_offset = self.push(txt_0);
        let second_offset = self.push(txt_1);
        unsafe { (self.offset(first_offset), self.offset(second_offset)) }
    }

    /// Attempts to clear the buffer if it's over the maximum length allowed.
    /// This is to prevent us from making a giant vec over time.
    fn refresh_buffer(&mut self) {
        if self.buffer.len() > self.max_len {
            self.buffer.clear();
        }
    }

    /// Given a position, gives an offset from the start of the scratch buffer.
    ///
    /// # Safety
    /// This can return a pointer to undefined data if given a
    /// `pos >= self.buffer.len()`. This is marked as unsafe to reflect that.
    unsafe fn offset(&self, pos: usize) -> *const std::os::raw::c_char {
        unsafe { self.buffer.as_ptr().add(pos) as *const _ }
    }

    /// Pushes a new scratch sheet text and returns the byte index where the
    /// sub-string starts.
    fn push(&mut self, txt: impl AsRef<str>) -> usize {
        assert!(!txt.as_ref().contains('\0'), "string contained null byte");
        let len = self.buffer.len();
        self.buffer.extend(txt.as_ref().as_bytes());
        self.buffer.push(b'\0');
        len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn scratch_txt_is_nul_terminated() {
        let mut buf = UiBuffer::new(1024);
        let ptr = buf.scratch_txt("hello");
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap();
        assert_eq!(s, "hello");
    }

    #[test]
    fn scratch_txt_two_returns_two_valid_strings() {
        let mut buf = UiBuffer::new(1024);
        let (a_ptr, b_ptr) = buf.scratch_txt_two("a", "bcd");
        let a = unsafe { CStr::from_ptr(a_ptr) }.to_str().unwrap();
        let b = unsafe { CStr::from_ptr(b_ptr) }.to_str().unwrap();
        assert_eq!(a, "a");
        assert_eq!(b, "bcd");
    }

    #[test]
    fn scratch_txt_opt_maps_none_to_null() {
        let mut buf = UiBuffer::new(1024);
        assert!(buf.scratch_txt_opt(None::<&str>).is_null());
    }

    #[test]
    #[should_panic(expected = "null byte")]
    fn rejects_interior_nul() {
        let mut buf = UiBuffer::new(1024);
        let _ = buf.scratch_txt("a\0b");
    }
}
