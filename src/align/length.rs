/*! Length-based sentence aligner

Dynamic programming bead search following Gale & Church (1993),
_A Program for Aligning Sentences in Bilingual Corpora_.

Each bead shape `(i, j)` (i source sentences against j target sentences)
is scored by how likely the character lengths of both spans are translations of each other,
plus a prior on the shape itself.
Lengths of the target side are normalized by the target/source length ratio
of the whole document, since Chinese and Vietnamese have very different
character counts for the same content.

The search is restricted to a band around the diagonal.
If no path is found in the band, the search is retried on the full space.
!*/
use log::{debug, warn};

use crate::align::aligner::{Aligner, Alignment, Bead};
use crate::error::Error;
use crate::sentence;

/// Variance of the length difference (per character), from Gale & Church.
const VARIANCE: f64 = 6.8;

/// Lowest probability considered, avoids infinite costs.
const MIN_PROB: f64 = 1e-12;

const NO_SHAPE: u8 = u8::MAX;

pub struct LengthAligner {
    max_align: usize,
    window: usize,
    is_split: bool,
}

impl Default for LengthAligner {
    /// Beads of up to 5 sentences, band of 100 sentences around the diagonal,
    /// texts are sentence-split.
    fn default() -> Self {
        Self {
            max_align: 5,
            window: 100,
            is_split: false,
        }
    }
}

impl LengthAligner {
    /// Set the maximum number of sentences (both sides) in a bead, clamped to `2..=10`.
    pub fn with_max_align(mut self, max_align: usize) -> Self {
        self.max_align = max_align.clamp(2, 10);
        self
    }

    /// Set the width of the search band.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    /// Consider input texts as already split: one sentence per line.
    pub fn with_is_split(mut self, is_split: bool) -> Self {
        self.is_split = is_split;
        self
    }

    pub fn max_align(&self) -> usize {
        self.max_align
    }

    /// Bead shapes allowed in the search.
    ///
    /// One-sided beads are limited to a single sentence.
    fn shapes(&self) -> Vec<(usize, usize)> {
        let mut shapes = Vec::new();
        for i in 0..=self.max_align {
            for j in 0..=(self.max_align - i) {
                let allowed = match (i, j) {
                    (0, 0) => false,
                    (0, j) => j == 1,
                    (i, 0) => i == 1,
                    _ => true,
                };
                if allowed {
                    shapes.push((i, j));
                }
            }
        }
        shapes
    }

    /// Align two sequences of sentence lengths.
    pub fn align_lengths(&self, src: &[usize], tgt: &[usize]) -> Result<Vec<Bead>, Error> {
        if src.is_empty() || tgt.is_empty() {
            return Err(Error::Alignment(format!(
                "cannot align {} source sentences with {} target sentences",
                src.len(),
                tgt.len()
            )));
        }

        let src_total: usize = src.iter().sum();
        let tgt_total: usize = tgt.iter().sum();
        let ratio = if src_total == 0 || tgt_total == 0 {
            1.0
        } else {
            tgt_total as f64 / src_total as f64
        };
        debug!("target/source length ratio: {:.3}", ratio);

        let search = Search {
            src_prefix: prefix_sums(src),
            tgt_prefix: prefix_sums(tgt),
            ratio,
            shapes: self.shapes(),
        };

        let (n, m) = (src.len(), tgt.len());
        let spread = n.max(m) / n.min(m) + 1;
        let width = self.window.max(spread * self.max_align);

        if let Some(beads) = search.run(width) {
            return Ok(beads);
        }

        let full = n.max(m);
        if width < full {
            warn!(
                "no alignment path in a band of {}, retrying on the full search space",
                width
            );
            if let Some(beads) = search.run(full) {
                return Ok(beads);
            }
        }

        Err(Error::Alignment(format!(
            "no alignment path between {} and {} sentences",
            n, m
        )))
    }
}

impl Aligner for LengthAligner {
    fn align(&self, src: &str, tgt: &str) -> Result<Alignment, Error> {
        let split: fn(&str) -> Vec<String> = if self.is_split {
            sentence::split_lines
        } else {
            sentence::split_sentences
        };
        let src_sents = split(src);
        let tgt_sents = split(tgt);
        debug!(
            "aligning {} source sentences with {} target sentences",
            src_sents.len(),
            tgt_sents.len()
        );

        let src_lens: Vec<usize> = src_sents.iter().map(|s| sentence::char_len(s)).collect();
        let tgt_lens: Vec<usize> = tgt_sents.iter().map(|s| sentence::char_len(s)).collect();
        let beads = self.align_lengths(&src_lens, &tgt_lens)?;

        Ok(Alignment {
            src_sents,
            tgt_sents,
            beads,
        })
    }
}

/// One search over a (banded) cost matrix.
struct Search {
    src_prefix: Vec<usize>,
    tgt_prefix: Vec<usize>,
    ratio: f64,
    shapes: Vec<(usize, usize)>,
}

impl Search {
    fn n(&self) -> usize {
        self.src_prefix.len() - 1
    }

    fn m(&self) -> usize {
        self.tgt_prefix.len() - 1
    }

    /// Inclusive range of target positions searched for source position `i`.
    fn band(&self, i: usize, width: usize) -> (usize, usize) {
        let (n, m) = (self.n(), self.m());
        let center = (i * m + n / 2) / n;
        (center.saturating_sub(width), (center + width).min(m))
    }

    fn bead_cost(&self, i: usize, j: usize, di: usize, dj: usize) -> f64 {
        let l1 = self.src_prefix[i] - self.src_prefix[i - di];
        let l2 = self.tgt_prefix[j] - self.tgt_prefix[j - dj];
        length_cost(l1, l2, self.ratio) + prior_cost(di, dj)
    }

    fn run(&self, width: usize) -> Option<Vec<Bead>> {
        let (n, m) = (self.n(), self.m());
        let bands: Vec<(usize, usize)> = (0..=n).map(|i| self.band(i, width)).collect();

        let mut cost: Vec<Vec<f64>> = bands
            .iter()
            .map(|(lo, hi)| vec![f64::INFINITY; hi - lo + 1])
            .collect();
        let mut back: Vec<Vec<u8>> = bands
            .iter()
            .map(|(lo, hi)| vec![NO_SHAPE; hi - lo + 1])
            .collect();

        cost[0][0] = 0.0;

        for i in 0..=n {
            let (lo, hi) = bands[i];
            for j in lo..=hi {
                if i == 0 && j == 0 {
                    continue;
                }
                let mut best = f64::INFINITY;
                let mut best_shape = NO_SHAPE;
                for (k, &(di, dj)) in self.shapes.iter().enumerate() {
                    if di > i || dj > j {
                        continue;
                    }
                    let (pi, pj) = (i - di, j - dj);
                    let (plo, phi) = bands[pi];
                    if pj < plo || pj > phi {
                        continue;
                    }
                    let prev = cost[pi][pj - plo];
                    if !prev.is_finite() {
                        continue;
                    }
                    let c = prev + self.bead_cost(i, j, di, dj);
                    if c < best {
                        best = c;
                        best_shape = k as u8;
                    }
                }
                cost[i][j - lo] = best;
                back[i][j - lo] = best_shape;
            }
        }

        let (lo, hi) = bands[n];
        if m < lo || m > hi || !cost[n][m - lo].is_finite() {
            return None;
        }

        // backtrack from (n, m)
        let mut beads = Vec::new();
        let (mut i, mut j) = (n, m);
        while i > 0 || j > 0 {
            let (lo, _) = bands[i];
            let shape = back[i][j - lo];
            if shape == NO_SHAPE {
                return None;
            }
            let (di, dj) = self.shapes[shape as usize];
            beads.push(Bead::new((i - di..i).collect(), (j - dj..j).collect()));
            i -= di;
            j -= dj;
        }
        beads.reverse();
        Some(beads)
    }
}

fn prefix_sums(lengths: &[usize]) -> Vec<usize> {
    let mut sums = Vec::with_capacity(lengths.len() + 1);
    sums.push(0);
    for l in lengths {
        sums.push(sums[sums.len() - 1] + l);
    }
    sums
}

/// `-ln(P(match | l1, l2))`, target length normalized by `ratio`.
fn length_cost(l1: usize, l2: usize, ratio: f64) -> f64 {
    let l1 = l1 as f64;
    let l2 = l2 as f64 / ratio;
    let mean = (l1 + l2) / 2.0;
    if mean == 0.0 {
        return 0.0;
    }
    let delta = (l2 - l1) / (mean * VARIANCE).sqrt();
    let prob = 2.0 * (1.0 - norm_cdf(delta.abs()));
    -prob.max(MIN_PROB).ln()
}

/// `-ln(P(shape))`.
fn prior_cost(di: usize, dj: usize) -> f64 {
    let prior = match (di, dj) {
        (1, 1) => 0.89,
        (1, 2) | (2, 1) => 0.0445,
        (2, 2) => 0.011,
        (1, 0) | (0, 1) => 0.005,
        _ => 0.001,
    };
    -f64::ln(prior)
}

/// Standard normal cumulative distribution function.
fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Abramowitz & Stegun 7.1.26, max error 1.5e-7.
fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + 0.327_591_1 * x);
    let y = 1.0
        - (((((1.061_405_429 * t - 1.453_152_027) * t) + 1.421_413_741) * t - 0.284_496_736) * t
            + 0.254_829_592)
            * t
            * (-x * x).exp();
    sign * y
}
