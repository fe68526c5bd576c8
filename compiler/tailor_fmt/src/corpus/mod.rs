//! The exemplar pool and nearest-neighbor search.
//!
//! A corpus is built once from labeled training documents and is read-only
//! afterwards, so it can be shared by reference across rayon workers without
//! locking. Exemplars keep document order: ties on distance resolve to the
//! lowest insertion index, which makes output reproducible for a fixed
//! corpus regardless of thread count.

use std::io::{self, Write};

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::Mode;
use crate::distance::weighted_l0_distance;
use crate::document::InputDocument;
use crate::error::FormatError;
use crate::features::{extract_labels, FeatureSchema, FeatureVector, Labels};

/// One (vector, labels) pair drawn from a training document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exemplar {
    /// Index into [`Corpus::documents`].
    pub document: u32,
    /// Token-stream index of the token in its document.
    pub token_index: u32,
    pub features: FeatureVector,
    pub labels: Labels,
}

/// An exemplar ranked against a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Neighbor {
    pub distance: u32,
    /// Insertion index of the exemplar.
    pub index: usize,
}

/// Result of classifying one query vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub labels: Labels,
    /// Distance to the nearest exemplar; `0` is an exact match.
    pub distance: u32,
    /// Insertion index of the nearest exemplar.
    pub exemplar: usize,
}

impl Classification {
    fn new(nearest: Neighbor, labels: Labels) -> Self {
        Classification {
            labels,
            distance: nearest.distance,
            exemplar: nearest.index,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }
}

/// Flat, immutable pool of exemplars from every training document.
#[derive(Clone, Debug)]
pub struct Corpus {
    schema: FeatureSchema,
    documents: Vec<String>,
    exemplars: Vec<Exemplar>,
}

impl Corpus {
    /// Build the pool from training documents, in document order.
    ///
    /// Documents without label bundles get theirs derived here. With
    /// `parallel` set, per-document work runs on the rayon pool; the result
    /// is the same either way.
    pub fn build(
        schema: FeatureSchema,
        documents: &[InputDocument],
        parallel: bool,
    ) -> Result<Corpus, FormatError> {
        let per_document = |(doc_index, doc): (usize, &InputDocument)| {
            exemplars_of(&schema, doc_index, doc)
        };
        let pools: Vec<Result<Vec<Exemplar>, FormatError>> = if documents.len() <= 1 || !parallel
        {
            documents.iter().enumerate().map(per_document).collect()
        } else {
            documents.par_iter().enumerate().map(per_document).collect()
        };

        let mut exemplars = Vec::with_capacity(documents.iter().map(|d| d.features.len()).sum());
        for pool in pools {
            exemplars.extend(pool?);
        }
        if exemplars.is_empty() {
            return Err(FormatError::EmptyCorpus);
        }

        debug!(
            documents = documents.len(),
            exemplars = exemplars.len(),
            "built corpus"
        );
        Ok(Corpus {
            schema,
            documents: documents.iter().map(|d| d.file_name.clone()).collect(),
            exemplars,
        })
    }

    #[inline]
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Names of the training documents, in build order.
    #[inline]
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    #[inline]
    pub fn exemplars(&self) -> &[Exemplar] {
        &self.exemplars
    }

    #[inline]
    pub fn exemplar(&self, index: usize) -> Option<&Exemplar> {
        self.exemplars.get(index)
    }

    /// Name of the document an exemplar came from.
    pub fn document_name(&self, exemplar: &Exemplar) -> &str {
        self.documents
            .get(exemplar.document as usize)
            .map_or("", String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.exemplars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exemplars.is_empty()
    }

    /// Fail unless `query` has one value per schema column.
    pub fn check_schema(&self, query: &[i32]) -> Result<(), FormatError> {
        if query.len() == self.schema.len() {
            Ok(())
        } else {
            Err(FormatError::SchemaMismatch {
                expected: self.schema.len(),
                found: query.len(),
            })
        }
    }

    /// The exemplar with the smallest weighted distance to `query`.
    ///
    /// Exhaustive scan; ties go to the lowest insertion index.
    pub fn nearest(&self, query: &[i32]) -> Result<Neighbor, FormatError> {
        self.check_schema(query)?;
        let mut best: Option<Neighbor> = None;
        for (index, exemplar) in self.exemplars.iter().enumerate() {
            let distance = weighted_l0_distance(&self.schema, query, &exemplar.features);
            let better = match best {
                Some(b) => distance < b.distance,
                None => true,
            };
            if better {
                best = Some(Neighbor { distance, index });
                if distance == 0 {
                    break;
                }
            }
        }
        best.ok_or(FormatError::EmptyCorpus)
    }

    /// The `k` exemplars closest to `query`, ordered by distance and then
    /// insertion index.
    pub fn k_nearest(&self, query: &[i32], k: usize) -> Result<Vec<Neighbor>, FormatError> {
        self.check_schema(query)?;
        if self.exemplars.is_empty() {
            return Err(FormatError::EmptyCorpus);
        }
        let mut ranked: Vec<Neighbor> = self
            .exemplars
            .iter()
            .enumerate()
            .map(|(index, exemplar)| Neighbor {
                distance: weighted_l0_distance(&self.schema, query, &exemplar.features),
                index,
            })
            .collect();
        let k = k.clamp(1, ranked.len());
        if k < ranked.len() {
            ranked.select_nth_unstable(k - 1);
            ranked.truncate(k);
        }
        ranked.sort_unstable();
        Ok(ranked)
    }

    /// Pick a label bundle for `query` under `mode`.
    pub fn classify(&self, query: &[i32], mode: Mode) -> Result<Classification, FormatError> {
        match mode {
            Mode::Nearest => {
                let best = self.nearest(query)?;
                Ok(Classification::new(best, self.exemplars[best.index].labels))
            }
            Mode::Vote { k } => {
                let ranked = self.k_nearest(query, k)?;
                let labels = self.vote(&ranked);
                Ok(Classification::new(ranked[0], labels))
            }
        }
    }

    /// Majority label bundle among `ranked`; ties go to the bundle whose
    /// first voter ranks best.
    fn vote(&self, ranked: &[Neighbor]) -> Labels {
        let mut tally: FxHashMap<Labels, (usize, usize)> = FxHashMap::default();
        for (rank, neighbor) in ranked.iter().enumerate() {
            let entry = tally
                .entry(self.exemplars[neighbor.index].labels)
                .or_insert((0, rank));
            entry.0 += 1;
        }
        tally
            .into_iter()
            .min_by_key(|&(_, (votes, first_rank))| (std::cmp::Reverse(votes), first_rank))
            .map_or_else(Labels::default, |(labels, _)| labels)
    }

    /// Dump the pool as CSV: a header of column names, then one row of
    /// feature values per exemplar, values joined by `", "`.
    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        let header: Vec<&str> = self.schema.names().collect();
        writeln!(out, "{}", header.join(", "))?;
        for exemplar in &self.exemplars {
            let row: Vec<String> = exemplar.features.iter().map(i32::to_string).collect();
            writeln!(out, "{}", row.join(", "))?;
        }
        out.flush()
    }
}

fn exemplars_of(
    schema: &FeatureSchema,
    doc_index: usize,
    doc: &InputDocument,
) -> Result<Vec<Exemplar>, FormatError> {
    if let Some(bad) = doc.features.iter().find(|v| v.len() != schema.len()) {
        return Err(FormatError::SchemaMismatch {
            expected: schema.len(),
            found: bad.len(),
        });
    }
    let derived;
    let labels: &[Labels] = match &doc.labels {
        Some(labels) => labels,
        None => {
            derived = extract_labels(&doc.tokens, &doc.tree);
            &derived
        }
    };
    assert_eq!(
        labels.len(),
        doc.features.len(),
        "feature vectors and labels out of step in {}",
        doc.file_name
    );

    let document = u32::try_from(doc_index).unwrap_or(u32::MAX);
    let real = doc.tokens.real_indices();
    Ok(doc
        .features
        .iter()
        .zip(labels)
        .zip(real)
        .map(|((features, &labels), token_index)| Exemplar {
            document,
            token_index: u32::try_from(token_index).unwrap_or(u32::MAX),
            features: features.clone(),
            labels,
        })
        .collect())
}
