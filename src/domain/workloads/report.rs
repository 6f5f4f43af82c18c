// Copyright 2025 the oc-utils authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleDirection {
    Up,
    Down,
}

impl ScaleDirection {
    /// Replica count after applying this direction, or `None` when the
    /// adjustment is not possible (scaling down from zero).
    pub fn apply(&self, replicas: u32) -> Option<u32> {
        match self {
            ScaleDirection::Up => Some(replicas + 1),
            ScaleDirection::Down => replicas.checked_sub(1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleDirection::Up => "scale-up",
            ScaleDirection::Down => "scale-down",
        }
    }
}

impl std::fmt::Display for ScaleDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of adjusting one deployment configuration.
#[derive(Debug, Clone)]
pub struct ScaleOutcome {
    pub name: String,
    pub previous: u32,
    pub desired: u32,
    /// False when the deployment was left alone (already at zero replicas
    /// on a scale-down).
    pub applied: bool,
}

impl ScaleOutcome {
    pub fn applied(name: impl Into<String>, previous: u32, desired: u32) -> Self {
        Self {
            name: name.into(),
            previous,
            desired,
            applied: true,
        }
    }

    pub fn skipped(name: impl Into<String>, previous: u32) -> Self {
        Self {
            name: name.into(),
            previous,
            desired: previous,
            applied: false,
        }
    }
}

/// A pod deleted because it outlived the age threshold.
#[derive(Debug, Clone)]
pub struct RestartedPod {
    pub name: String,
    pub age_hours: i64,
}

/// Summary of one restartpods run over a namespace.
#[derive(Debug, Clone)]
pub struct RestartReport {
    pub threshold_days: u32,
    pub examined: usize,
    pub restarted: Vec<RestartedPod>,
    /// Pods without a start time (pending or just scheduled) are never
    /// restarted, whatever their creation time says.
    pub skipped_pending: usize,
}

impl RestartReport {
    pub fn new(threshold_days: u32) -> Self {
        Self {
            threshold_days,
            examined: 0,
            restarted: Vec::new(),
            skipped_pending: 0,
        }
    }
}
