use tailor_ir::{NodeId, ParseTree, RuleType, TokenStream, TokenType};

use super::{Feature, FeatureVector, Labels, FEATURE_COUNT};

#[inline]
fn token_value(ty: TokenType) -> i32 {
    i32::from(ty.raw())
}

#[inline]
fn rule_value(rule: RuleType) -> i32 {
    i32::from(rule.raw())
}

#[inline]
fn count_value(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Parent node of the real token at stream index `index`.
#[inline]
fn parent_of(tree: &ParseTree, index: usize) -> Option<NodeId> {
    tree.leaf(index).map(|leaf| leaf.parent)
}

/// Type of the real token at real-token position `pos`, or `0` outside the
/// document.
fn token_at(tokens: &TokenStream, real: &[usize], pos: Option<usize>) -> i32 {
    pos.and_then(|p| real.get(p))
        .and_then(|&i| tokens.get(i))
        .map_or(0, |t| token_value(t.ty))
}

/// One feature vector per real token, in token order.
pub fn extract_features(tokens: &TokenStream, tree: &ParseTree) -> Vec<FeatureVector> {
    let real = tokens.real_indices();
    real.iter()
        .enumerate()
        .map(|(pos, &index)| vector_for(tokens, tree, &real, pos, index))
        .collect()
}

fn vector_for(
    tokens: &TokenStream,
    tree: &ParseTree,
    real: &[usize],
    pos: usize,
    index: usize,
) -> FeatureVector {
    let mut v: FeatureVector = smallvec::smallvec![0; FEATURE_COUNT];

    v[Feature::Prev2Token.column()] = token_at(tokens, real, pos.checked_sub(2));
    v[Feature::PrevToken.column()] = token_at(tokens, real, pos.checked_sub(1));
    v[Feature::Token.column()] = token_at(tokens, real, Some(pos));
    v[Feature::NextToken.column()] = token_at(tokens, real, Some(pos + 1));

    let Some(leaf) = tree.leaf(index) else {
        return v;
    };
    let parent = leaf.parent;
    v[Feature::ParentRule.column()] = rule_value(tree.rule(parent));
    v[Feature::GrandparentRule.column()] = rule_value(tree.ancestor_rule(parent, 1));
    v[Feature::GreatGrandparentRule.column()] = rule_value(tree.ancestor_rule(parent, 2));
    v[Feature::GreatGreatGrandparentRule.column()] = rule_value(tree.ancestor_rule(parent, 3));
    v[Feature::ChildIndex.column()] = i32::try_from(leaf.child_index).unwrap_or(i32::MAX);
    v[Feature::Depth.column()] = count_value(tree.depth(parent));

    let prev_parent = pos
        .checked_sub(1)
        .and_then(|p| real.get(p))
        .and_then(|&i| parent_of(tree, i));
    if let Some(prev_parent) = prev_parent {
        v[Feature::PrevParentRule.column()] = rule_value(tree.rule(prev_parent));
        let (common, _) = tree.common_ancestor(parent, prev_parent);
        v[Feature::CommonAncestorRule.column()] = rule_value(tree.rule(common));
    }

    v
}

/// One label bundle per real token, read from the whitespace preceding it.
///
/// The first real token is the start-of-file boundary and gets all zeros.
pub fn extract_labels(tokens: &TokenStream, tree: &ParseTree) -> Vec<Labels> {
    let real = tokens.real_indices();
    let mut labels = Vec::with_capacity(real.len());
    for (pos, &index) in real.iter().enumerate() {
        if pos == 0 {
            labels.push(Labels::default());
            continue;
        }
        let whitespace = tokens.hidden_text_before(index);
        let bytes = whitespace.as_bytes();
        let newlines = memchr::memchr_iter(b'\n', bytes).count();
        let inject_whitespace = memchr::memchr2(b' ', b'\t', bytes).is_some();
        let indent = match tokens.get(index) {
            Some(token) if newlines > 0 => token.column,
            _ => 0,
        };
        let levels = match (parent_of(tree, real[pos - 1]), parent_of(tree, index)) {
            (Some(prev), Some(current)) => tree.common_ancestor(current, prev).1,
            _ => 0,
        };
        labels.push(Labels {
            inject_newlines: u32::try_from(newlines).unwrap_or(u32::MAX),
            inject_whitespace,
            indent,
            levels_to_common_ancestor: u32::try_from(levels).unwrap_or(u32::MAX),
        });
    }
    labels
}
