// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elastic and rigid spacing: [`Glue`] and [`Kern`].

/// Degree of elasticity of a glue component.
///
/// `Normal` is finite. Each following order is "infinitely" more elastic than
/// the one before it: once any glue in a list has a nonzero component at some
/// order, every component of a lower order is ignored when the list is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GlueOrder {
    /// Finite elasticity.
    #[default]
    Normal,
    /// First-order infinity (`fil`).
    Fil,
    /// Second-order infinity (`fill`).
    Fill,
    /// Third-order infinity (`filll`).
    Filll,
}

impl GlueOrder {
    /// Every order, from finite to the highest infinity.
    pub const ALL: [Self; 4] = [Self::Normal, Self::Fil, Self::Fill, Self::Filll];

    /// Number of distinct orders.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this order in [`GlueOrder::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` for the infinite orders.
    #[inline]
    pub const fn is_infinite(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// One elastic component (stretch or shrink) of a glue: an amount at an order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlueSpec {
    /// How far the glue can stretch or shrink at `order`.
    pub amount: f64,
    /// The order the amount is measured in.
    pub order: GlueOrder,
}

impl GlueSpec {
    /// No elasticity.
    pub const NONE: Self = Self::finite(0.0);

    /// A spec at an explicit order.
    #[inline]
    pub const fn new(amount: f64, order: GlueOrder) -> Self {
        Self { amount, order }
    }

    /// A finite spec.
    #[inline]
    pub const fn finite(amount: f64) -> Self {
        Self::new(amount, GlueOrder::Normal)
    }

    /// A `fil` spec.
    #[inline]
    pub const fn fil(amount: f64) -> Self {
        Self::new(amount, GlueOrder::Fil)
    }

    /// A `fill` spec.
    #[inline]
    pub const fn fill(amount: f64) -> Self {
        Self::new(amount, GlueOrder::Fill)
    }

    /// A `filll` spec.
    #[inline]
    pub const fn filll(amount: f64) -> Self {
        Self::new(amount, GlueOrder::Filll)
    }
}

/// Elastic spacing: a nominal space plus independent shrink and stretch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Glue {
    /// Natural size along the list's axis.
    pub space: f64,
    /// How much the glue may give up when the list is too long.
    pub shrink: GlueSpec,
    /// How much the glue may grow when the list is too short.
    pub stretch: GlueSpec,
}

impl Glue {
    /// Creates a glue from its three components.
    #[inline]
    pub const fn new(space: f64, shrink: GlueSpec, stretch: GlueSpec) -> Self {
        Self {
            space,
            shrink,
            stretch,
        }
    }

    /// Glue with no elasticity at all.
    #[inline]
    pub const fn fixed(space: f64) -> Self {
        Self::new(space, GlueSpec::NONE, GlueSpec::NONE)
    }

    /// Zero space, `1fil` stretch.
    #[inline]
    pub const fn fil() -> Self {
        Self::new(0.0, GlueSpec::NONE, GlueSpec::fil(1.0))
    }

    /// Zero space, `1fill` stretch.
    #[inline]
    pub const fn fill() -> Self {
        Self::new(0.0, GlueSpec::NONE, GlueSpec::fill(1.0))
    }

    /// Zero space, `1fil` stretch and `1fil` shrink.
    #[inline]
    pub const fn ss() -> Self {
        Self::new(0.0, GlueSpec::fil(1.0), GlueSpec::fil(1.0))
    }

    /// Zero space, `-1fil` stretch.
    #[inline]
    pub const fn neg_fil() -> Self {
        Self::new(0.0, GlueSpec::NONE, GlueSpec::fil(-1.0))
    }

    /// Same elasticity, different nominal space.
    #[inline]
    #[must_use]
    pub const fn with_space(self, space: f64) -> Self {
        Self { space, ..self }
    }
}

/// Rigid spacing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Kern {
    /// Size along the list's axis. May be negative.
    pub space: f64,
}

impl Kern {
    /// Creates a kern of the given size.
    #[inline]
    pub const fn new(space: f64) -> Self {
        Self { space }
    }
}
