//! Errors surfaced by the editor binary.

use std::fmt;

use pfx::GpuError;

/// Errors that stop the editor from starting or running.
#[derive(Debug)]
pub enum EditorError {
    /// Failed to create the event loop, or it exited abnormally.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the OS window.
    Window(winit::error::OsError),
    /// GPU presenter setup failed.
    Gpu(GpuError),
    /// Config file could not be read or written.
    ConfigIo(std::io::Error),
    /// Config file is not valid JSON for [`EditorConfig`](crate::config::EditorConfig).
    ConfigParse(serde_json::Error),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::EventLoop(e) => write!(f, "Event loop error: {}", e),
            EditorError::Window(e) => write!(f, "Failed to create window: {}", e),
            EditorError::Gpu(e) => write!(f, "GPU error: {}", e),
            EditorError::ConfigIo(e) => write!(f, "Failed to access config file: {}", e),
            EditorError::ConfigParse(e) => write!(f, "Invalid config file: {}", e),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditorError::EventLoop(e) => Some(e),
            EditorError::Window(e) => Some(e),
            EditorError::Gpu(e) => Some(e),
            EditorError::ConfigIo(e) => Some(e),
            EditorError::ConfigParse(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for EditorError {
    fn from(e: winit::error::EventLoopError) -> Self {
        EditorError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for EditorError {
    fn from(e: winit::error::OsError) -> Self {
        EditorError::Window(e)
    }
}

impl From<GpuError> for EditorError {
    fn from(e: GpuError) -> Self {
        EditorError::Gpu(e)
    }
}

impl From<std::io::Error> for EditorError {
    fn from(e: std::io::Error) -> Self {
        EditorError::ConfigIo(e)
    }
}

impl From<serde_json::Error> for EditorError {
    fn from(e: serde_json::Error) -> Self {
        EditorError::ConfigParse(e)
    }
}
