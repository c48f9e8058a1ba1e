use std::collections::VecDeque;

use gridroute_core::Point;

use crate::traits::Pather;
use crate::UNREACHABLE;

/// Unweighted step count from `from` to `to` by breadth-first search.
///
/// Every move counts 1 regardless of cell cost, which makes this an
/// independent oracle for A* on uniform-cost grids. Returns `None` when `to`
/// cannot be reached or either point is out of bounds.
pub fn bfs_distance<P: Pather>(pather: &P, from: Point, to: Point) -> Option<u32> {
    let bounds = pather.bounds();
    let si = bounds.index(from)?;
    let ti = bounds.index(to)?;

    let mut dist = vec![UNREACHABLE; bounds.len()];
    dist[si] = 0;
    let mut queue: VecDeque<Point> = VecDeque::new();
    queue.push_back(from);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(cp) = queue.pop_front() {
        let Some(ci) = bounds.index(cp) else {
            continue;
        };
        if ci == ti {
            return Some(dist[ci]);
        }

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = dist[ci] + 1;
            queue.push_back(np);
        }
    }

    None
}
