// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared handles to one buffer.
//!
//! Cloning a [`SharedBuffer`] yields another handle to the same storage, so a
//! mutation through either is visible through both. Operations that take a
//! second handle as their source check whether it is the same storage and
//! snapshot it before mutating, so `buf[k:] = buf` style assignments never
//! read bytes they have already overwritten.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::buffer::ByteBuffer;
use crate::error::Result;
use crate::slice::Slice;

/// A cloneable, single-threaded handle to a [`ByteBuffer`].
#[derive(Clone, Default)]
pub struct SharedBuffer {
    inner: Rc<RefCell<ByteBuffer>>,
}

impl SharedBuffer {
    pub fn new(buf: ByteBuffer) -> Self {
        SharedBuffer {
            inner: Rc::new(RefCell::new(buf)),
        }
    }

    /// Whether two handles refer to the same storage.
    pub fn same_storage(&self, other: &SharedBuffer) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn borrow(&self) -> Ref<'_, ByteBuffer> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, ByteBuffer> {
        self.inner.borrow_mut()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// An independent copy of the current contents.
    pub fn snapshot(&self) -> ByteBuffer {
        self.inner.borrow().clone()
    }

    /// Assign `source`'s contents to a slice of this buffer.
    pub fn set_slice(&self, slice: impl Into<Slice>, source: &SharedBuffer) -> Result<()> {
        let slice = slice.into();
        if self.same_storage(source) {
            debug!("slice source aliases destination");
            return self.inner.borrow_mut().set_slice_from_self(slice);
        }
        let source = source.inner.borrow();
        self.inner.borrow_mut().assign(slice, source.as_bytes())
    }

    /// Append `source`'s contents.
    pub fn extend(&self, source: &SharedBuffer) -> Result<()> {
        if self.same_storage(source) {
            debug!("extend source aliases destination");
            return self.inner.borrow_mut().extend_from_self();
        }
        let source = source.inner.borrow();
        self.inner.borrow_mut().extend(source.as_bytes())
    }
}

impl From<ByteBuffer> for SharedBuffer {
    fn from(buf: ByteBuffer) -> Self {
        SharedBuffer::new(buf)
    }
}

impl fmt::Debug for SharedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedBuffer").field(&*self.inner.borrow()).finish()
    }
}
