// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glue setting: distributing the difference between natural and desired size.

use crate::{Glue, GlueOrder, GlueTotals};

/// Badness reported for a box whose glue could not reach the desired size.
pub const INF_BAD: u32 = 10_000;

/// How a target-size rebox turned out.
#[must_use = "an underfull or overfull box usually needs the caller's attention"]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoxingResult {
    /// The box has exactly the desired size.
    Normal,
    /// The box is smaller than desired: not enough stretch.
    Underfull,
    /// The box is larger than desired: not enough shrink.
    Overfull,
}

impl BoxingResult {
    /// Classifies a final size against the desired one.
    pub fn classify(final_size: f64, desired: f64) -> Self {
        if final_size < desired {
            Self::Underfull
        } else if final_size > desired {
            Self::Overfull
        } else {
            Self::Normal
        }
    }

    /// Returns `true` for [`BoxingResult::Normal`].
    #[inline]
    pub const fn is_normal(self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Which elastic component of the glue is in use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GlueSign {
    /// Every glue has its nominal space.
    #[default]
    Natural,
    /// Glue of the setting's order is stretched.
    Stretching,
    /// Glue of the setting's order is shrunk.
    Shrinking,
}

/// The glue setting recorded on a list box by its last rebox.
///
/// Only glue whose stretch (or shrink) is of [`GlueSetting::order`] changes
/// size; every other glue keeps its nominal space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlueSetting {
    /// Direction of the adjustment.
    pub sign: GlueSign,
    /// The only order that takes part in the adjustment.
    pub order: GlueOrder,
    /// Multiplier applied to each participating stretch or shrink amount.
    pub ratio: f64,
    badness: u32,
}

impl GlueSetting {
    /// The setting of a box at its natural size.
    pub const NATURAL: Self = Self {
        sign: GlueSign::Natural,
        order: GlueOrder::Normal,
        ratio: 0.0,
        badness: 0,
    };

    /// Size of `glue` under this setting.
    pub fn set_size(&self, glue: &Glue) -> f64 {
        match self.sign {
            GlueSign::Natural => glue.space,
            GlueSign::Stretching if glue.stretch.order == self.order => {
                glue.space + self.ratio * glue.stretch.amount
            }
            GlueSign::Shrinking if glue.shrink.order == self.order => {
                glue.space - self.ratio * glue.shrink.amount
            }
            GlueSign::Stretching | GlueSign::Shrinking => glue.space,
        }
    }

    /// How far the glue had to be pushed, on TeX's 0..=10000 scale.
    ///
    /// Infinite glue is never bad. A box that needed elasticity it did not
    /// have, or that could not shrink enough, is [`INF_BAD`].
    #[inline]
    pub const fn badness(&self) -> u32 {
        self.badness
    }
}

/// Outcome of [`set_glue`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlueSet {
    /// The setting to record on the box.
    pub setting: GlueSetting,
    /// Size of the box along the list axis once the setting is applied.
    pub size: f64,
}

impl GlueSet {
    /// Classifies [`GlueSet::size`] against `desired`.
    pub fn result(&self, desired: f64) -> BoxingResult {
        BoxingResult::classify(self.size, desired)
    }
}

/// Distributes `desired - natural` over the available elasticity.
///
/// The highest order with a nonzero total takes the whole difference; lower
/// orders are left alone. Finite shrink never goes past its total, so a box
/// short on finite shrink stays overfull. Without any elasticity in the
/// needed direction the box keeps its natural size.
pub fn set_glue(natural: f64, desired: f64, stretch: &GlueTotals, shrink: &GlueTotals) -> GlueSet {
    let excess = desired - natural;
    if excess == 0.0 {
        return GlueSet {
            setting: GlueSetting::NATURAL,
            size: natural,
        };
    }

    let (sign, totals, wanted) = if excess > 0.0 {
        (GlueSign::Stretching, stretch, excess)
    } else {
        (GlueSign::Shrinking, shrink, -excess)
    };
    let order = totals.highest_order();
    let total = totals[order];
    if total == 0.0 {
        return GlueSet {
            setting: GlueSetting {
                badness: INF_BAD,
                ..GlueSetting::NATURAL
            },
            size: natural,
        };
    }

    let ratio = wanted / total;
    if sign == GlueSign::Shrinking && order == GlueOrder::Normal && ratio > 1.0 {
        return GlueSet {
            setting: GlueSetting {
                sign,
                order,
                ratio: 1.0,
                badness: INF_BAD,
            },
            size: natural - total,
        };
    }

    GlueSet {
        setting: GlueSetting {
            sign,
            order,
            ratio,
            badness: if order.is_infinite() {
                0
            } else {
                badness(wanted, total)
            },
        },
        size: desired,
    }
}

/// TeX's badness of adjusting by `t` given a total elasticity of `s`.
///
/// Roughly `100 (t/s)^3`, capped at [`INF_BAD`].
pub fn badness(t: f64, s: f64) -> u32 {
    if t == 0.0 {
        return 0;
    }
    if s <= 0.0 {
        return INF_BAD;
    }
    let r = t / s;
    let b = 100.0 * r * r * r;
    if b.is_nan() || b >= f64::from(INF_BAD) {
        INF_BAD
    } else {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Value is in 0..INF_BAD after the check above"
        )]
        let rounded = (b + 0.5) as u32;
        rounded.min(INF_BAD)
    }
}
