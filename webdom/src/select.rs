//! Predicate queries over an element tree.
//!
//! The widget layer addresses elements by id, so most queries here return
//! ids or shared references; [`collect_mut`] exists for batch attribute
//! work and [`detach_all`] for handing subtrees to a new owner.

use crate::element::{Content, Element};

/// Find the first element (depth-first, document order) matching the
/// predicate.
pub fn find_first<'a>(root: &'a Element, pred: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
    if pred(root) {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_first(child, pred) {
            return Some(found);
        }
    }

    None
}

/// Find the first element matching the predicate, mutably.
pub fn find_first_mut<'a>(
    root: &'a mut Element,
    pred: &dyn Fn(&Element) -> bool,
) -> Option<&'a mut Element> {
    if pred(root) {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_first_mut(child, pred) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element matching the predicate, in document order.
pub fn collect<'a>(root: &'a Element, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
    let mut out = Vec::new();
    collect_into(root, pred, &mut out);
    out
}

fn collect_into<'a>(
    el: &'a Element,
    pred: &dyn Fn(&Element) -> bool,
    out: &mut Vec<&'a Element>,
) {
    if pred(el) {
        out.push(el);
    }
    for child in el.child_elements() {
        collect_into(child, pred, out);
    }
}

/// Collect the ids of every element matching the predicate.
pub fn collect_ids(root: &Element, pred: &dyn Fn(&Element) -> bool) -> Vec<String> {
    collect(root, pred).iter().map(|el| el.id.clone()).collect()
}

/// Collect mutable references to every element matching the predicate.
///
/// A matched element is not descended into, so the returned references are
/// disjoint. Fine for the leaf-shaped elements batch attribute work targets.
pub fn collect_mut<'a>(
    root: &'a mut Element,
    pred: &dyn Fn(&Element) -> bool,
) -> Vec<&'a mut Element> {
    let mut out = Vec::new();
    collect_mut_into(root, pred, &mut out);
    out
}

fn collect_mut_into<'a>(
    el: &'a mut Element,
    pred: &dyn Fn(&Element) -> bool,
    out: &mut Vec<&'a mut Element>,
) {
    if pred(el) {
        out.push(el);
        return;
    }
    if let Content::Children(children) = &mut el.content {
        for child in children {
            collect_mut_into(child, pred, out);
        }
    }
}

/// Remove every element matching the predicate from the tree and return
/// them, in document order. Matched elements keep their subtrees; the root
/// itself is never detached.
pub fn detach_all(root: &mut Element, pred: &dyn Fn(&Element) -> bool) -> Vec<Element> {
    let mut out = Vec::new();
    if let Content::Children(children) = &mut root.content {
        let mut i = 0;
        while i < children.len() {
            if pred(&children[i]) {
                log::debug!("[detach_all] detaching {}", children[i].id);
                out.push(children.remove(i));
            } else {
                out.extend(detach_all(&mut children[i], pred));
                i += 1;
            }
        }
    }
    out
}
