//! Backend type alias and device management
//!
//! The NdArray backend is sufficient for this environment given its tiny
//! observation size. GPU support (via the Wgpu backend) could be added later
//! if a consumer needs it.

use burn::backend::ndarray::{NdArray, NdArrayDevice};

/// CPU tensor backend used for observation encoding
pub type CpuBackend = NdArray<f32>;

/// Get the default device for computation
///
/// Returns the default NdArray device (CPU). Safe to call repeatedly.
pub fn default_device() -> NdArrayDevice {
    NdArrayDevice::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_device() {
        let device = default_device();
        let _device_copy = device.clone();
    }
}
