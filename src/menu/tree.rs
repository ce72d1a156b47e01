//! Tree Builder
//!
//! Turns a flat, store-ordered list of menu items into an annotated forest:
//! every node carries its resolved URL, the node matching the current request
//! path is marked active, and the chain from its root down to it is marked
//! expanded.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::menu::UrlResolver;
use crate::models::{MenuItem, MAX_MENU_DEPTH, NO_URL};

// == Menu Node ==
/// Render-time view of one menu item. Built fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuNode {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub parent_id: Option<Uuid>,
    pub children: Vec<MenuNode>,
    pub has_children: bool,
    pub is_active: bool,
    pub is_expanded: bool,
}

// == Menu Tree ==
/// The assembled forest for one menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuTree {
    pub menu_name: String,
    pub forest: Vec<MenuNode>,
    /// Id of the active node, if the request path matched one
    pub active: Option<Uuid>,
}

impl MenuTree {
    /// Depth-first, pre-order walk over every node.
    pub fn iter(&self) -> Nodes<'_> {
        Nodes {
            stack: self.forest.iter().rev().collect(),
        }
    }

    /// First node in depth-first order with the given id.
    pub fn find(&self, id: Uuid) -> Option<&MenuNode> {
        self.iter().find(|node| node.id == id)
    }

    pub fn active_node(&self) -> Option<&MenuNode> {
        self.iter().find(|node| node.is_active)
    }

    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }
}

/// Iterator returned by [`MenuTree::iter`].
pub struct Nodes<'a> {
    stack: Vec<&'a MenuNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a MenuNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

// == Build ==
/// Assembles the menu forest for `current_path`.
///
/// `items` must already be in store order; that order is kept among roots and
/// among the children of every node. Items whose parent is missing from
/// `items` become roots. Parent chains that loop back on themselves are cut at
/// the node where the loop closes, which then becomes a root, so every input
/// item appears exactly once in the result. Items nested deeper than
/// [`MAX_MENU_DEPTH`] are re-rooted the same way.
///
/// The first item (in input order) whose URL equals `current_path` exactly is
/// active. Items without any URL never match.
///
/// Runs without recursion, so the input shape cannot exhaust the stack.
pub fn build_menu_tree(
    menu_name: &str,
    items: &[MenuItem],
    current_path: &str,
    resolver: &dyn UrlResolver,
) -> MenuTree {
    let urls: Vec<String> = items
        .iter()
        .map(|item| item.resolve_url(resolver))
        .collect();

    let mut index: HashMap<Uuid, usize> = HashMap::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        index.entry(item.id).or_insert(pos);
    }

    let mut parents: Vec<Option<usize>> = items
        .iter()
        .map(|item| item.parent_id.and_then(|id| index.get(&id).copied()))
        .collect();

    let promoted = break_cycles(&mut parents);
    if !promoted.is_empty() {
        debug!(
            "Menu '{}': promoted {} item(s) caught in parent cycles to roots",
            menu_name,
            promoted.len()
        );
    }

    let cut = cap_depth(&mut parents, MAX_MENU_DEPTH);
    if !cut.is_empty() {
        debug!(
            "Menu '{}': re-rooted {} item(s) nested deeper than {}",
            menu_name,
            cut.len(),
            MAX_MENU_DEPTH
        );
    }

    let mut roots = Vec::new();
    let mut children = vec![Vec::new(); items.len()];
    for (pos, parent) in parents.iter().enumerate() {
        match parent {
            Some(parent) => children[*parent].push(pos),
            None => roots.push(pos),
        }
    }

    let active = urls
        .iter()
        .position(|url| url != NO_URL && url == current_path);

    let expanded: HashSet<usize> = active
        .and_then(|target| path_to(&roots, &children, target))
        .unwrap_or_default()
        .into_iter()
        .collect();

    // post-order: every child is built before its parent
    let mut built: Vec<Option<MenuNode>> = vec![None; items.len()];
    for pos in post_order(&roots, &children) {
        let item = &items[pos];
        let kids: Vec<MenuNode> = children[pos]
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        built[pos] = Some(MenuNode {
            id: item.id,
            name: item.name.clone(),
            url: urls[pos].clone(),
            parent_id: item.parent_id,
            has_children: !kids.is_empty(),
            children: kids,
            is_active: active == Some(pos),
            is_expanded: expanded.contains(&pos),
        });
    }

    MenuTree {
        menu_name: menu_name.to_string(),
        forest: roots.iter().filter_map(|&root| built[root].take()).collect(),
        active: active.map(|pos| items[pos].id),
    }
}

// == Cycle Breaking ==
/// Cuts every parent chain that never reaches a root.
///
/// Walks up from each node; if a walk revisits a node it is still on, that
/// node loses its parent. Returns the positions that were cut loose.
fn break_cycles(parents: &mut [Option<usize>]) -> Vec<usize> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        Unseen,
        OnWalk,
        Rooted,
    }

    let mut marks = vec![Mark::Unseen; parents.len()];
    let mut promoted = Vec::new();
    let mut walk = Vec::new();

    for start in 0..parents.len() {
        let mut pos = start;
        loop {
            match marks[pos] {
                Mark::Rooted => break,
                Mark::OnWalk => {
                    parents[pos] = None;
                    promoted.push(pos);
                    break;
                }
                Mark::Unseen => {}
            }
            marks[pos] = Mark::OnWalk;
            walk.push(pos);
            match parents[pos] {
                Some(parent) => pos = parent,
                None => break,
            }
        }
        for pos in walk.drain(..) {
            marks[pos] = Mark::Rooted;
        }
    }

    promoted
}

// == Depth Cap ==
/// Detaches every node that would sit below level `max` (roots are level 1).
///
/// `parents` must be acyclic. Returns the positions that were detached.
fn cap_depth(parents: &mut [Option<usize>], max: usize) -> Vec<usize> {
    // 0 = not yet known
    let mut depths = vec![0usize; parents.len()];
    let mut cut = Vec::new();
    let mut walk = Vec::new();

    for start in 0..parents.len() {
        let mut above = 0;
        let mut pos = start;
        loop {
            if depths[pos] != 0 {
                above = depths[pos];
                break;
            }
            walk.push(pos);
            match parents[pos] {
                Some(parent) => pos = parent,
                None => break,
            }
        }

        // walk runs bottom-up; assign depths from the top down
        for &pos in walk.iter().rev() {
            let depth = if above >= max {
                parents[pos] = None;
                cut.push(pos);
                1
            } else {
                above + 1
            };
            depths[pos] = depth;
            above = depth;
        }
        walk.clear();
    }

    cut
}

// == Traversal ==
/// Positions reachable from `roots`, each after all of its descendants.
fn post_order(roots: &[usize], children: &[Vec<usize>]) -> Vec<usize> {
    let mut order = Vec::with_capacity(children.len());
    let mut visited = HashSet::new();
    // (position, index of the next child to enter)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for &root in roots {
        if !visited.insert(root) {
            continue;
        }
        stack.push((root, 0));
        while let Some(top) = stack.last_mut() {
            let (pos, next) = *top;
            match children[pos].get(next) {
                Some(&child) => {
                    top.1 += 1;
                    if visited.insert(child) {
                        stack.push((child, 0));
                    }
                }
                None => {
                    order.push(pos);
                    stack.pop();
                }
            }
        }
    }

    order
}

// == Active Path ==
/// Root-to-target chain of positions, found by depth-first search.
///
/// The explicit stack is the current path; each node is entered at most once.
fn path_to(roots: &[usize], children: &[Vec<usize>], target: usize) -> Option<Vec<usize>> {
    let mut visited = HashSet::new();
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for &root in roots {
        if !visited.insert(root) {
            continue;
        }
        stack.push((root, 0));
        while let Some(top) = stack.last_mut() {
            let (pos, next) = *top;
            if pos == target {
                return Some(stack.iter().map(|&(pos, _)| pos).collect());
            }
            match children[pos].get(next) {
                Some(&child) => {
                    top.1 += 1;
                    if visited.insert(child) {
                        stack.push((child, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    None
}
