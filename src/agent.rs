/*
 * Agent Module
 *
 * This module defines the Agent struct and the PPS motion law.
 * Every step an agent:
 * 1. Counts the neighbors to its left and to its right, in its own frame
 * 2. Turns by a fixed angle alpha plus beta per neighbor, towards the side
 *    holding more neighbors
 * 3. Moves forward at constant speed, wrapping around the domain edges
 */

use rand::Rng;
use std::f32::consts::TAU;

use crate::point::Point2D;

// Neighbors closer than this count as close neighbors
pub const CLOSE_RANGE: f32 = 1.3;

#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    pub position: Point2D,
    // Fraction of a full turn, always in [0, 1)
    pub heading: f32,
    pub species: usize,
    pub neighbors: u32,
    pub close_neighbors: u32,
}

impl Agent {
    pub fn new(position: Point2D, heading: f32, species: usize) -> Self {
        Self {
            position,
            heading: wrap_heading(heading),
            species,
            neighbors: 0,
            close_neighbors: 0,
        }
    }

    pub fn with_random_heading<R: Rng + ?Sized>(rng: &mut R, position: Point2D, species: usize) -> Self {
        Self::new(position, rng.gen::<f32>(), species)
    }

    // Unit vector the agent is facing
    pub fn velocity(&self) -> Point2D {
        let (sin, cos) = (self.heading * TAU).sin_cos();
        Point2D::new(cos, sin)
    }

    // Heading converted to a rotation in degrees for drawing. Uses
    // atan2(sin, -cos) rather than atan2(cos, -sin); with six-fold hexagons
    // both render identically.
    pub fn display_angle(&self) -> f32 {
        let velocity = self.velocity();
        velocity.y.atan2(-velocity.x).to_degrees()
    }

    /// Apply the PPS turning rule.
    ///
    /// `neighbors` are the positions of the agents inside the perception
    /// radius, excluding this agent. Neighbor and close-neighbor counts are
    /// recomputed from scratch. Ties between the left and right side turn
    /// the agent right.
    pub fn update_heading<I>(&mut self, neighbors: I, alpha: f32, beta: f32, width: f32, height: f32)
    where
        I: IntoIterator<Item = Point2D>,
    {
        let (sin, cos) = (self.heading * TAU).sin_cos();
        let mut left = 0u32;
        let mut right = 0u32;
        let mut close = 0u32;

        for other in neighbors {
            let offset = self.position.toroidal_offset(other, width, height);

            if offset.length2() < CLOSE_RANGE * CLOSE_RANGE {
                close += 1;
            }

            // y component after rotating the offset into the agent's frame
            let side = cos * offset.y - sin * offset.x;
            if side > 0.0 {
                left += 1;
            } else {
                right += 1;
            }
        }

        let count = left + right;
        let sign = if left > right { 1.0 } else { -1.0 };

        self.neighbors = count;
        self.close_neighbors = close;
        self.heading = wrap_heading(self.heading + alpha / 360.0 + (beta / 360.0) * count as f32 * sign);
    }

    // Move forward by `speed` along the current heading
    pub fn move_forward(&mut self, width: f32, height: f32, speed: f32) {
        self.position = (self.position + self.velocity() * speed).wrapped(width, height);
    }
}

fn wrap_heading(heading: f32) -> f32 {
    if (0.0..1.0).contains(&heading) {
        return heading;
    }
    if !heading.is_finite() {
        return 0.0;
    }

    let wrapped = heading.rem_euclid(1.0);
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
