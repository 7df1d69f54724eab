//! Route table and planner
//!
//! Only the pairs listed in [`DIRECT_ROUTES`] have a backend. Pairs without
//! one may be composed through a hand-picked pivot language listed in
//! [`PIVOT_ROUTES`]. The planner never searches the graph for other paths:
//! each pivot is chosen for translation quality, not mere reachability.

use crate::mt::error::{MtError, MtResult};
use crate::mt::language::{Hop, Language};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

/// Directly translatable pairs and the model each one is served by.
pub static DIRECT_ROUTES: &[(Hop, &str)] = &[
    (Hop::new(Language::Uz, Language::Ru), "Helsinki-NLP/opus-mt-uz-ru"),
    (Hop::new(Language::Ru, Language::Uz), "Helsinki-NLP/opus-mt-ru-uz"),
    (Hop::new(Language::Ru, Language::En), "Helsinki-NLP/opus-mt-ru-en"),
    (Hop::new(Language::En, Language::Ru), "Helsinki-NLP/opus-mt-en-ru"),
];

/// Pairs without a direct model and the language they pivot through.
pub static PIVOT_ROUTES: &[(Hop, Language)] = &[
    (Hop::new(Language::Uz, Language::En), Language::Ru),
    (Hop::new(Language::En, Language::Uz), Language::Ru),
];

static DEFAULT_TABLE: LazyLock<RouteTable> = LazyLock::new(|| {
    RouteTable::new(
        DIRECT_ROUTES
            .iter()
            .map(|(hop, key)| (*hop, key.to_string())),
        PIVOT_ROUTES.iter().copied(),
    )
});

/// Ordered hops needed to carry text from one language to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePlan {
    /// Source and target are the same; nothing to invoke
    Identity,
    Direct(Hop),
    /// Two hops through an intermediate language
    Pivot(Hop, Hop),
}

impl RoutePlan {
    pub fn hops(&self) -> Vec<Hop> {
        match *self {
            RoutePlan::Identity => Vec::new(),
            RoutePlan::Direct(hop) => vec![hop],
            RoutePlan::Pivot(first, second) => vec![first, second],
        }
    }

    pub fn hop_count(&self) -> usize {
        match self {
            RoutePlan::Identity => 0,
            RoutePlan::Direct(_) => 1,
            RoutePlan::Pivot(..) => 2,
        }
    }
}

impl std::fmt::Display for RoutePlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoutePlan::Identity => write!(f, "identity"),
            RoutePlan::Direct(hop) => write!(f, "{}", hop),
            RoutePlan::Pivot(first, second) => {
                write!(f, "{}->{}->{}", first.source, first.target, second.target)
            }
        }
    }
}

/// Direct routes with their resource keys, plus curated pivots
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    direct: BTreeMap<Hop, String>,
    pivots: BTreeMap<Hop, Language>,
}

impl RouteTable {
    pub fn new(
        direct: impl IntoIterator<Item = (Hop, String)>,
        pivots: impl IntoIterator<Item = (Hop, Language)>,
    ) -> Self {
        Self {
            direct: direct.into_iter().collect(),
            pivots: pivots.into_iter().collect(),
        }
    }

    /// The process-wide table built from [`DIRECT_ROUTES`] and [`PIVOT_ROUTES`]
    pub fn standard() -> &'static RouteTable {
        &DEFAULT_TABLE
    }

    pub fn with_direct(mut self, hop: Hop, resource_key: &str) -> Self {
        self.direct.insert(hop, resource_key.to_string());
        self
    }

    pub fn with_pivot(mut self, hop: Hop, via: Language) -> Self {
        self.pivots.insert(hop, via);
        self
    }

    pub fn is_direct(&self, hop: Hop) -> bool {
        self.direct.contains_key(&hop)
    }

    /// Resource key (model id) of a direct hop
    pub fn resource_key(&self, hop: Hop) -> Option<&str> {
        self.direct.get(&hop).map(String::as_str)
    }

    pub fn direct_hops(&self) -> impl Iterator<Item = (Hop, &str)> {
        self.direct.iter().map(|(hop, key)| (*hop, key.as_str()))
    }

    pub fn pivot_hops(&self) -> impl Iterator<Item = (Hop, Language)> + '_ {
        self.pivots.iter().map(|(hop, via)| (*hop, *via))
    }

    /// Plan the hops from `source` to `target`
    ///
    /// A pivot is only used when both of its legs are direct routes of this
    /// table.
    pub fn plan(&self, source: Language, target: Language) -> MtResult<RoutePlan> {
        if source == target {
            return Ok(RoutePlan::Identity);
        }

        let hop = Hop::new(source, target);
        if self.is_direct(hop) {
            debug!(%hop, "direct route");
            return Ok(RoutePlan::Direct(hop));
        }

        if let Some(&via) = self.pivots.get(&hop) {
            let first = Hop::new(source, via);
            let second = Hop::new(via, target);
            if self.is_direct(first) && self.is_direct(second) {
                debug!(%hop, %via, "pivot route");
                return Ok(RoutePlan::Pivot(first, second));
            }
        }

        Err(MtError::RouteUnsupported { source, target })
    }
}

/// Plan a route using the standard table
pub fn plan(source: Language, target: Language) -> MtResult<RoutePlan> {
    RouteTable::standard().plan(source, target)
}
