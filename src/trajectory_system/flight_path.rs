use std::collections::VecDeque;

use crate::utils::vector2d::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    pub from: Vector2D,
    pub to: Vector2D,
}

impl PathSegment {
    pub fn new(from: Vector2D, to: Vector2D) -> Self {
        PathSegment { from, to }
    }

    pub fn length(&self) -> f64 {
        self.from.distance_to(&self.to)
    }
}

#[derive(Debug, Clone)]
pub struct FlightPath {
    segments: VecDeque<PathSegment>,
    capacity: usize,
}

impl FlightPath {
    pub fn new(capacity: usize) -> Self {
        FlightPath {
            segments: VecDeque::new(),
            capacity,
        }
    }

    pub fn record(&mut self, segment: PathSegment) {
        if self.capacity == 0 {
            return;
        }
        if self.segments.len() == self.capacity {
            self.segments.pop_front();
        }
        self.segments.push_back(segment);
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.back()
    }
}
