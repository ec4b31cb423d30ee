// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CPU capability probe used by backend dispatch.

/// Test-only override. AES can only be forced off: the hardware backend
/// requires a positive probe.
#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureDetectorBehaviour {
    None,
    ForceAesFalse,
}

#[derive(Debug)]
pub struct FeatureDetector {
    #[cfg(test)]
    behaviour: FeatureDetectorBehaviour,
}

impl Default for FeatureDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureDetector {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            #[cfg(test)]
            behaviour: FeatureDetectorBehaviour::None,
        }
    }

    // Platform-level AES detection (no test override)
    #[inline(always)]
    pub fn platform_has_aes(&self) -> bool {
        #[cfg(has_hardware_backend)]
        {
            cpufeatures::new!(aes_detection, "aes");
            aes_detection::get()
        }

        #[cfg(not(has_hardware_backend))]
        false
    }

    #[inline(always)]
    pub fn has_aes(&self) -> bool {
        #[cfg(test)]
        {
            match self.behaviour {
                FeatureDetectorBehaviour::None => self.platform_has_aes(),
                FeatureDetectorBehaviour::ForceAesFalse => false,
            }
        }

        #[cfg(not(test))]
        self.platform_has_aes()
    }

    #[cfg(test)]
    pub fn change_behaviour(&mut self, behaviour: FeatureDetectorBehaviour) {
        self.behaviour = behaviour;
    }
}
