//! Context lifecycle
//!
//! A [`Context`] owns the underlying Dear ImGui context. Due to upstream
//! design, at most one context can be active at any time; additional contexts
//! can exist in suspended form and be activated when the slot is free.

use parking_lot::ReentrantMutex;
use std::ffi::CString;
use std::path::PathBuf;
use std::ptr;

use crate::error::{SugarError, SugarResult};
use crate::io::Io;
use crate::sys;
use crate::ui::Ui;

// Guards all operations that touch the global active-context slot.
static CTX_MUTEX: ReentrantMutex<()> = parking_lot::const_reentrant_mutex(());

fn clear_current_context() {
    unsafe {
        sys::igSetCurrentContext(ptr::null_mut());
    }
}

fn no_current_context() -> bool {
    unsafe { sys::igGetCurrentContext() }.is_null()
}

/// An active Dear ImGui context.
///
/// # Examples
///
/// ```no_run
/// let mut ctx = dear_imgui_sugar::Context::create_or_panic();
/// ctx.io_mut().set_display_size([1280.0, 720.0]);
/// let ui = ctx.frame();
/// // build UI with the with_*!/set_*! constructs
/// ```
#[derive(Debug)]
pub struct Context {
    raw: *mut sys::ImGuiContext,
    ini_filename: Option<CString>,
    ui: Ui,
}

impl Context {
    /// Creates a new active Dear ImGui context.
    ///
    /// # Errors
    ///
    /// Returns an error if another context is already active, or if the
    /// underlying context could not be created.
    pub fn create() -> SugarResult<Context> {
        let _guard = CTX_MUTEX.lock();

        if !no_current_context() {
            return Err(SugarError::ContextAlreadyActive);
        }

        let raw = unsafe { sys::igCreateContext(ptr::null_mut()) };
        if raw.is_null() {
            return Err(SugarError::ContextCreation {
                reason: "igCreateContext returned null".to_string(),
            });
        }

        unsafe {
            sys::igSetCurrentContext(raw);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Dear ImGui context created");

        Ok(Context {
            raw,
            ini_filename: None,
            ui: Ui::new(),
        })
    }

    /// Creates a new active Dear ImGui context (panics on error).
    ///
    /// # Panics
    ///
    /// Panics if another context is already active or context creation fails.
    pub fn create_or_panic() -> Context {
        Self::create().expect("Failed to create Dear ImGui context")
    }

    /// Returns a mutable reference to the context's IO object
    pub fn io_mut(&mut self) -> &mut Io {
        let _guard = CTX_MUTEX.lock();
        unsafe { &mut *(sys::igGetIO_Nil() as *mut Io) }
    }

    /// Returns a shared reference to the context's IO object
    pub fn io(&self) -> &Io {
        let _guard = CTX_MUTEX.lock();
        unsafe { &*(sys::igGetIO_Nil() as *const Io) }
    }

    /// Sets the INI filename for settings persistence; `None` disables it.
    ///
    /// # Errors
    ///
    /// Returns an error if the filename contains an interior NUL byte.
    pub fn set_ini_filename<P: Into<PathBuf>>(&mut self, filename: Option<P>) -> SugarResult<()> {
        let _guard = CTX_MUTEX.lock();

        self.ini_filename = match filename {
            Some(f) => Some(CString::new(f.into().to_string_lossy().into_owned())?),
            None => None,
        };

        unsafe {
            let io = sys::igGetIO_Nil();
            (*io).IniFilename = self
                .ini_filename
                .as_ref()
                .map(|s| s.as_ptr())
                .unwrap_or(ptr::null());
        }
        Ok(())
    }

    /// Starts a new frame and returns the [`Ui`] handle for building it.
    ///
    /// Builds the default font atlas on first use.
    pub fn frame(&mut self) -> &mut Ui {
        let _guard = CTX_MUTEX.lock();

        unsafe {
            let io = sys::igGetIO_Nil();
            let fonts = (*io).Fonts;

            if (*fonts).Fonts.Size == 0 {
                sys::ImFontAtlas_AddFontDefault(fonts, ptr::null());
            }

            if !(*fonts).TexIsBuilt {
                sys::igImFontAtlasBuildMain(fonts);
                (*fonts).TexIsBuilt = true;
            }

            sys::igNewFrame();
        }
        &mut self.ui
    }

    /// Finishes the current frame.
    ///
    /// Draw-data extraction and rendering backends are out of scope for this
    /// crate; this call only closes the frame the stack discipline opened.
    pub fn render(&mut self) {
        let _guard = CTX_MUTEX.lock();
        unsafe {
            sys::igRender();
        }
    }

    /// Suspends this context so another context can become active
    pub fn suspend(self) -> SuspendedContext {
        let _guard = CTX_MUTEX.lock();
        assert!(
            self.is_current_context(),
            "context to be suspended is not the active context"
        );
        clear_current_context();
        SuspendedContext(self)
    }

    fn is_current_context(&self) -> bool {
        unsafe { sys::igGetCurrentContext() == self.raw }
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        let _guard = CTX_MUTEX.lock();
        unsafe {
            if !self.raw.is_null() {
                if sys::igGetCurrentContext() == self.raw {
                    clear_current_context();
                }
                sys::igDestroyContext(self.raw);
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!("Dear ImGui context destroyed");
    }
}

/// A suspended Dear ImGui context.
///
/// Retains its state but is not usable until activated.
#[derive(Debug)]
pub struct SuspendedContext(Context);

impl SuspendedContext {
    /// Creates a new suspended Dear ImGui context.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying context could not be created.
    pub fn create() -> SugarResult<Self> {
        let _guard = CTX_MUTEX.lock();

        let raw = unsafe { sys::igCreateContext(ptr::null_mut()) };
        if raw.is_null() {
            return Err(SugarError::ContextCreation {
                reason: "igCreateContext returned null".to_string(),
            });
        }

        let ctx = Context {
            raw,
            ini_filename: None,
            ui: Ui::new(),
        };

        // Creation may have made it current; a suspended context must not be.
        if ctx.is_current_context() {
            clear_current_context();
        }

        Ok(SuspendedContext(ctx))
    }

    /// Attempts to activate this suspended context.
    ///
    /// Fails and returns `self` if another context is currently active.
    pub fn activate(self) -> Result<Context, SuspendedContext> {
        let _guard = CTX_MUTEX.lock();
        if no_current_context() {
            unsafe {
                sys::igSetCurrentContext(self.0.raw);
            }
            Ok(self.0)
        } else {
            Err(self)
        }
    }
}

unsafe impl Send for Context {}
unsafe impl Sync for Context {}
