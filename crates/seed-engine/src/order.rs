//! Dependency ordering of models.
//!
//! Models are visited depth-first in registry order; each model is emitted
//! after the models its foreign keys point at. An edge back into a model
//! still being visited closes a cycle and is dropped, so cyclic schemas
//! still yield every model exactly once.

use seed_core::Model;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Indices of `models` in dependency order.
///
/// Dependencies naming a model outside the list are ignored.
pub fn dependency_order(models: &[Model]) -> Vec<usize> {
    let index: HashMap<&str, usize> = models
        .iter()
        .enumerate()
        .map(|(i, m)| (m.name.as_str(), i))
        .collect();

    let edges: Vec<Vec<usize>> = models
        .iter()
        .map(|m| {
            m.dependencies()
                .into_iter()
                .filter_map(|dep| index.get(dep).copied())
                .collect()
        })
        .collect();

    let mut marks = vec![Mark::Unvisited; models.len()];
    let mut order = Vec::with_capacity(models.len());

    for root in 0..models.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::InProgress;
        // (node, next edge to follow)
        let mut stack = vec![(root, 0usize)];

        while let Some(top) = stack.last_mut() {
            let node = top.0;
            let Some(&dep) = edges[node].get(top.1) else {
                marks[node] = Mark::Done;
                order.push(node);
                stack.pop();
                continue;
            };
            top.1 += 1;

            match marks[dep] {
                Mark::Unvisited => {
                    marks[dep] = Mark::InProgress;
                    stack.push((dep, 0));
                }
                Mark::InProgress => {
                    debug!(
                        "Dependency cycle: ignoring edge {} -> {}",
                        models[node].name, models[dep].name
                    );
                }
                Mark::Done => {}
            }
        }
    }

    order
}

/// Models in dependency order: every model after the models it references.
pub fn order_models(models: &[Model]) -> Vec<&Model> {
    dependency_order(models)
        .into_iter()
        .map(|i| &models[i])
        .collect()
}
