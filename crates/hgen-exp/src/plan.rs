use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use hgen_core::errors::{check_probability, ErrorInfo, HgenError};
use hgen_core::rng::RngHandle;
use hgen_core::Hypergraph;
use hgen_graph::{gen_from_scratch, gen_from_tree, ScratchFlags, TreeFlags};
use serde::{Deserialize, Serialize};

/// Generation algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Independent Bernoulli membership sampling.
    #[default]
    FromScratch,
    /// Random tree bipartition with Bernoulli growth.
    FromTree,
}

impl Method {
    /// Name used in file names and id cards.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::FromScratch => "from_scratch",
            Method::FromTree => "from_tree",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = HgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "from_scratch" => Ok(Method::FromScratch),
            "from_tree" => Ok(Method::FromTree),
            other => Err(HgenError::InvalidArgument(
                ErrorInfo::new("unknown-method", "unknown generation method")
                    .with_context("method", other)
                    .with_hint("expected from_scratch or from_tree"),
            )),
        }
    }
}

/// Switches forwarded to whichever generator a [`Method`] selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratorFlags {
    /// Flags used by [`Method::FromScratch`].
    #[serde(default)]
    pub scratch: ScratchFlags,
    /// Flags used by [`Method::FromTree`].
    #[serde(default)]
    pub tree: TreeFlags,
}

/// Runs the selected generator for one instance.
///
/// The tree method receives `num_nodes + num_hyperedges` as its total size.
pub fn generate(
    method: Method,
    num_nodes: usize,
    num_hyperedges: usize,
    p: f64,
    flags: &GeneratorFlags,
    rng: &mut RngHandle,
) -> Result<Hypergraph, HgenError> {
    match method {
        Method::FromScratch => gen_from_scratch(num_nodes, num_hyperedges, p, flags.scratch, rng),
        Method::FromTree => {
            gen_from_tree(tree_size(num_nodes, num_hyperedges)?, p, flags.tree, rng)
        }
    }
}

/// Tree size used by [`Method::FromTree`]: nodes plus hyperedges, at least one.
pub fn tree_size(num_nodes: usize, num_hyperedges: usize) -> Result<usize, HgenError> {
    let total = num_nodes.checked_add(num_hyperedges).ok_or_else(|| {
        HgenError::InvalidArgument(
            ErrorInfo::new("total-size-overflow", "nodes plus hyperedges overflows usize")
                .with_context("num_nodes", num_nodes.to_string())
                .with_context("num_hyperedges", num_hyperedges.to_string()),
        )
    })?;
    if total == 0 {
        return Err(HgenError::InvalidArgument(
            ErrorInfo::new("total-size-too-small", "tree generator needs at least one node")
                .with_context("total_size", "0"),
        ));
    }
    Ok(total)
}

/// Inclusive integer range sampled uniformly per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    /// Smallest value (inclusive).
    pub min: usize,
    /// Largest value (inclusive).
    pub max: usize,
}

impl CountRange {
    fn validate(&self, name: &str) -> Result<(), HgenError> {
        if self.min > self.max {
            return Err(HgenError::InvalidArgument(
                ErrorInfo::new("empty-range", "range minimum exceeds maximum")
                    .with_context("range", name)
                    .with_context("min", self.min.to_string())
                    .with_context("max", self.max.to_string()),
            ));
        }
        Ok(())
    }
}

/// Fixed-size batch, the positional CLI path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSpec {
    /// Number of instances to write.
    pub num_hypergraphs: usize,
    /// Nodes per instance.
    pub num_nodes: usize,
    /// Requested hyperedges per instance.
    pub num_hyperedges: usize,
    /// Membership or growth probability.
    pub p: f64,
    /// Generator selection.
    #[serde(default)]
    pub method: Method,
    /// Master seed; instance `i` uses substream `i`.
    #[serde(default = "DatasetPlan::default_seed")]
    pub seed: u64,
    /// Generator switches.
    #[serde(default)]
    pub flags: GeneratorFlags,
}

impl BatchSpec {
    /// Checks arguments before any instance is generated.
    pub fn validate(&self) -> Result<(), HgenError> {
        check_probability(self.p)?;
        if self.method == Method::FromTree {
            tree_size(self.num_nodes, self.num_hyperedges)?;
        }
        Ok(())
    }
}

/// Probability sweep describing a whole dataset.
///
/// Every field has a default, so an empty YAML document is a valid plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetPlan {
    /// Probability grid; one output directory per value.
    #[serde(default = "DatasetPlan::default_grid")]
    pub probabilities: Vec<f64>,
    /// Instances generated for every probability.
    #[serde(default = "DatasetPlan::default_instances")]
    pub instances_per_p: usize,
    /// Node count range.
    #[serde(default = "DatasetPlan::default_range")]
    pub nodes: CountRange,
    /// Requested hyperedge count range.
    #[serde(default = "DatasetPlan::default_range")]
    pub hyperedges: CountRange,
    /// Generator selection.
    #[serde(default)]
    pub method: Method,
    /// Master seed for the whole sweep.
    #[serde(default = "DatasetPlan::default_seed")]
    pub seed: u64,
    /// Generator switches.
    #[serde(default)]
    pub flags: GeneratorFlags,
}

impl Default for DatasetPlan {
    fn default() -> Self {
        Self {
            probabilities: Self::default_grid(),
            instances_per_p: Self::default_instances(),
            nodes: Self::default_range(),
            hyperedges: Self::default_range(),
            method: Method::default(),
            seed: Self::default_seed(),
            flags: GeneratorFlags::default(),
        }
    }
}

impl DatasetPlan {
    /// `0.05, 0.10, ..., 0.95`.
    pub fn default_grid() -> Vec<f64> {
        (1..20).map(|k| 0.05 * k as f64).collect()
    }

    const fn default_instances() -> usize {
        100
    }

    const fn default_range() -> CountRange {
        CountRange { min: 5, max: 50 }
    }

    const fn default_seed() -> u64 {
        42
    }

    /// Parses a YAML plan document.
    pub fn from_yaml_str(text: &str) -> Result<Self, HgenError> {
        serde_yaml::from_str(text)
            .map_err(|err| HgenError::Parse(ErrorInfo::new("plan-yaml", err.to_string())))
    }

    /// Loads a YAML plan from disk.
    pub fn load(path: &Path) -> Result<Self, HgenError> {
        let text = fs::read_to_string(path).map_err(|err| HgenError::io("read-plan", path, err))?;
        Self::from_yaml_str(&text).map_err(|err| match err {
            HgenError::Parse(info) => {
                HgenError::Parse(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Checks the grid and ranges before any output is written.
    pub fn validate(&self) -> Result<(), HgenError> {
        if self.probabilities.is_empty() {
            return Err(HgenError::InvalidArgument(ErrorInfo::new(
                "empty-grid",
                "plan lists no probabilities",
            )));
        }
        for p in &self.probabilities {
            check_probability(*p)?;
        }
        self.nodes.validate("nodes")?;
        self.hyperedges.validate("hyperedges")?;
        if self.method == Method::FromTree {
            tree_size(self.nodes.min, self.hyperedges.min)?;
            tree_size(self.nodes.max, self.hyperedges.max)?;
        }
        Ok(())
    }
}
