/*
 * Spatial Tree Module
 *
 * This module defines ToroidalTree, a 2D search tree used for radius-bounded
 * neighbor queries on a wrap-around plane. Nodes split alternately on x and y
 * (starting with x at the root) and live in a flat arena, referring to the
 * indexed positions by their index in a borrowed snapshot slice.
 *
 * The tree is never rebalanced. It is cheap enough to throw away and rebuild
 * from scratch every simulation step, which is what the population does.
 *
 * Seam handling: the descent itself works on a flat plane and only uses the
 * wrap-aware distance for its inclusion test. Neighbors across an edge are
 * found by repeating the descent for three shifted images of the query point.
 * That is exact as long as the search radius is well below half of the
 * domain size; larger radii may miss points.
 *
 * Not safe for concurrent mutation: `insert` takes `&mut self`, so the borrow
 * checker keeps searches and insertions from interleaving.
 */

use crate::point::Point2D;

#[derive(Clone, Copy, Debug)]
struct Node {
    id: usize,
    vertical: bool,
    left: Option<usize>,
    right: Option<usize>,
}

pub struct ToroidalTree<'a> {
    points: &'a [Point2D],
    nodes: Vec<Node>,
    root: Option<usize>,
    width: f32,
    height: f32,
}

impl<'a> ToroidalTree<'a> {
    // Create an empty tree over a position snapshot; nothing is indexed yet
    pub fn new(points: &'a [Point2D], width: f32, height: f32) -> Self {
        Self {
            points,
            nodes: Vec::with_capacity(points.len()),
            root: None,
            width,
            height,
        }
    }

    // Create a tree and insert every point of the snapshot in slice order
    pub fn build(points: &'a [Point2D], width: f32, height: f32) -> Self {
        let mut tree = Self::new(points, width, height);
        for id in 0..points.len() {
            tree.insert(id);
        }
        tree
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index the point at `id` in the snapshot.
    ///
    /// Walks down from the root comparing on each node's split axis; a
    /// coordinate strictly below the node's goes left, anything else
    /// (including ties) goes right. The new leaf splits on the other axis
    /// than its parent.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a valid index into the snapshot.
    pub fn insert(&mut self, id: usize) {
        let position = self.points[id];
        let new_index = self.nodes.len();

        let Some(mut current) = self.root else {
            self.nodes.push(Node { id, vertical: true, left: None, right: None });
            self.root = Some(new_index);
            return;
        };

        loop {
            let node = self.nodes[current];
            let here = self.points[node.id];
            let go_left = if node.vertical {
                position.x < here.x
            } else {
                position.y < here.y
            };

            match if go_left { node.left } else { node.right } {
                Some(child) => current = child,
                None => {
                    self.nodes.push(Node {
                        id,
                        vertical: !node.vertical,
                        left: None,
                        right: None,
                    });
                    let parent = &mut self.nodes[current];
                    if go_left {
                        parent.left = Some(new_index);
                    } else {
                        parent.right = Some(new_index);
                    }
                    return;
                }
            }
        }
    }

    /// Ids of every indexed point within toroidal distance `radius` of
    /// `query`, sorted and free of duplicates.
    ///
    /// A point sitting exactly on `query` is part of the result, so an agent
    /// searching around its own position always finds itself and has to
    /// filter its own id out. A non-positive radius matches nothing.
    pub fn search(&self, query: Point2D, radius: f32) -> Vec<usize> {
        let mut results = Vec::new();

        let Some(root) = self.root else {
            return results;
        };
        if !(radius > 0.0) {
            return results;
        }

        // Shift towards the opposite edge of whichever half the query is in
        let shift_x = if query.x > self.width / 2.0 { -self.width } else { self.width };
        let shift_y = if query.y > self.height / 2.0 { -self.height } else { self.height };

        let images = [
            query,
            Point2D::new(query.x + shift_x, query.y),
            Point2D::new(query.x + shift_x, query.y + shift_y),
            Point2D::new(query.x, query.y + shift_y),
        ];

        for image in images {
            self.search_from(root, image, radius, &mut results);
        }

        // The same point can match several images
        results.sort_unstable();
        results.dedup();
        results
    }

    fn search_from(&self, root: usize, query: Point2D, radius: f32, results: &mut Vec<usize>) {
        let radius2 = radius * radius;
        let mut pending = vec![root];

        while let Some(index) = pending.pop() {
            let node = &self.nodes[index];
            let here = self.points[node.id];

            if query.toroidal_distance2(here, self.width, self.height) < radius2 {
                results.push(node.id);
            }

            let (q, split) = if node.vertical {
                (query.x, here.x)
            } else {
                (query.y, here.y)
            };

            // The near side is always visited; the far side only when the
            // query disc reaches over the splitting line.
            if q < split {
                if let Some(left) = node.left {
                    pending.push(left);
                }
                if q + radius > split {
                    if let Some(right) = node.right {
                        pending.push(right);
                    }
                }
            } else {
                if let Some(right) = node.right {
                    pending.push(right);
                }
                if q - radius <= split {
                    if let Some(left) = node.left {
                        pending.push(left);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha12Rng;

    fn brute_force(points: &[Point2D], query: Point2D, radius: f32, w: f32, h: f32) -> Vec<usize> {
        points
            .iter()
            .enumerate()
            .filter(|(_, p)| query.toroidal_distance2(**p, w, h) < radius * radius)
            .map(|(i, _)| i)
            .collect()
    }

    fn random_points(seed: u64, n: usize, w: f32, h: f32) -> Vec<Point2D> {
        let mut rng = ChaCha12Rng::seed_from_u64(seed);
        (0..n)
            .map(|_| Point2D::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h)))
            .collect()
    }

    #[test]
    fn empty_tree_finds_nothing() {
        let points: Vec<Point2D> = Vec::new();
        let tree = ToroidalTree::build(&points, 10.0, 10.0);
        assert!(tree.is_empty());
        assert!(tree.search(Point2D::new(5.0, 5.0), 3.0).is_empty());
    }

    #[test]
    fn single_point_finds_itself() {
        let points = vec![Point2D::new(4.0, 6.0)];
        let tree = ToroidalTree::build(&points, 10.0, 10.0);
        assert_eq!(tree.search(points[0], 1.0), vec![0]);
    }

    #[test]
    fn every_point_finds_itself() {
        let points = random_points(7, 200, 50.0, 30.0);
        let tree = ToroidalTree::build(&points, 50.0, 30.0);
        for (id, p) in points.iter().enumerate() {
            assert!(tree.search(*p, 0.5).contains(&id));
        }
    }

    #[test]
    fn finds_neighbors_across_the_vertical_seam() {
        let points = vec![Point2D::new(0.1, 5.0), Point2D::new(9.9, 5.0)];
        let tree = ToroidalTree::build(&points, 10.0, 10.0);

        assert_eq!(tree.search(points[0], 1.0), vec![0, 1]);
        assert_eq!(tree.search(points[1], 1.0), vec![0, 1]);
    }

    #[test]
    fn finds_neighbors_across_a_corner() {
        let points = vec![
            Point2D::new(0.2, 0.2),
            Point2D::new(9.8, 9.8),
            Point2D::new(9.8, 0.2),
            Point2D::new(0.2, 9.8),
            Point2D::new(5.0, 5.0),
        ];
        let tree = ToroidalTree::build(&points, 10.0, 10.0);

        for id in 0..4 {
            assert_eq!(tree.search(points[id], 1.0), vec![0, 1, 2, 3]);
        }
        assert_eq!(tree.search(points[4], 1.0), vec![4]);
    }

    #[test]
    fn non_positive_radius_matches_nothing() {
        let points = vec![Point2D::new(1.0, 1.0), Point2D::new(1.0, 1.0)];
        let tree = ToroidalTree::build(&points, 10.0, 10.0);

        assert!(tree.search(points[0], 0.0).is_empty());
        assert!(tree.search(points[0], -2.0).is_empty());
        assert!(tree.search(points[0], f32::NAN).is_empty());
    }

    #[test]
    fn duplicate_positions_are_all_returned() {
        let points = vec![Point2D::new(3.0, 3.0); 4];
        let tree = ToroidalTree::build(&points, 10.0, 10.0);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.search(Point2D::new(3.0, 3.0), 0.1), vec![0, 1, 2, 3]);
    }

    #[test]
    fn split_axis_alternates_with_depth() {
        let points = vec![
            Point2D::new(5.0, 5.0),
            Point2D::new(2.0, 5.0),
            Point2D::new(2.0, 1.0),
            Point2D::new(5.0, 5.0),
        ];
        let tree = ToroidalTree::build(&points, 10.0, 10.0);

        let root = tree.nodes[tree.root.unwrap()];
        assert!(root.vertical);
        assert_eq!(root.id, 0);

        // x = 2 < 5 goes left, then y = 1 < 5 goes left again
        let left = tree.nodes[root.left.unwrap()];
        assert_eq!(left.id, 1);
        assert!(!left.vertical);
        let left_left = tree.nodes[left.left.unwrap()];
        assert_eq!(left_left.id, 2);
        assert!(left_left.vertical);

        // Ties go right
        let right = tree.nodes[root.right.unwrap()];
        assert_eq!(right.id, 3);
        assert!(!right.vertical);
    }

    #[test]
    fn matches_brute_force_on_random_points() {
        let (w, h) = (60.0, 45.0);
        let points = random_points(42, 400, w, h);
        let tree = ToroidalTree::build(&points, w, h);

        let mut rng = ChaCha12Rng::seed_from_u64(99);
        for _ in 0..200 {
            let query = Point2D::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h));
            let radius = rng.gen_range(0.5..8.0);
            assert_eq!(tree.search(query, radius), brute_force(&points, query, radius, w, h));
        }
    }

    #[test]
    fn insertion_order_does_not_change_results() {
        let (w, h) = (30.0, 30.0);
        let points = random_points(3, 250, w, h);

        let forward = ToroidalTree::build(&points, w, h);
        let mut backward = ToroidalTree::new(&points, w, h);
        for id in (0..points.len()).rev() {
            backward.insert(id);
        }

        for p in points.iter().step_by(5) {
            assert_eq!(forward.search(*p, 4.0), backward.search(*p, 4.0));
        }
    }
}
