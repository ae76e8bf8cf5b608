// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Progress reporting and cooperative cancellation

/// Receives progress updates at export phase boundaries
///
/// Any `FnMut(f32, &str)` closure is a progress sink that never cancels.
pub trait ExportProgress {
    /// Called before each phase with a percentage in `[0, 100]` and a label
    fn on_progress(&mut self, percent: f32, label: &str);

    /// Whether the caller asked to stop
    ///
    /// Checked between phases and once more when the document is closed.
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F: FnMut(f32, &str)> ExportProgress for F {
    fn on_progress(&mut self, percent: f32, label: &str) {
        self(percent, label)
    }
}
