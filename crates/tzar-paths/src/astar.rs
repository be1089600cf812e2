use log::debug;
use tzar_core::Point;

use crate::PathingSystem;
use crate::distance::chebyshev;
use crate::tile::TileRef;
use crate::traits::TileGrid;

impl PathingSystem {
    /// A* from `start` to `target` over the primary search front.
    ///
    /// Both points must be inside the grid.
    pub(crate) fn astar_heap<G: TileGrid + ?Sized>(
        &mut self,
        grid: &G,
        start: Point,
        target: Point,
    ) -> Vec<Point> {
        let start_ref = TileRef::new(self.layout.index(start));
        let target_ref = TileRef::new(self.layout.index(target));

        self.expanded = 0;
        if start_ref != target_ref && !grid.is_walkable(target_ref.index()) {
            debug!("pathing: target {target} is occupied, no path");
            return Vec::new();
        }

        let front = &mut self.front;
        front.cleanup();
        {
            let t = &mut front.tiles[target_ref.index()];
            t.g = 0;
            t.h = 0;
        }
        {
            let s = &mut front.tiles[start_ref.index()];
            s.g = 0;
            s.h = 0;
            s.parent = None;
        }
        front.open.add(start_ref, &front.tiles);

        let found = 'search: loop {
            let Some(current) = front.open.pop(&front.tiles) else {
                break 'search false;
            };
            front.closed.insert(current);
            self.expanded += 1;

            if current == target_ref {
                break 'search true;
            }

            let (current_pos, current_g) = {
                let c = &front.tiles[current.index()];
                (c.pos(), c.g)
            };

            for &n in self.neighbors.collect_at(current_pos, &self.layout) {
                let ni = n.index();
                if !grid.is_walkable(ni) || front.closed.find(n) {
                    continue;
                }
                let n_pos = front.tiles[ni].pos();
                let tentative = current_g + chebyshev(current_pos, n_pos);

                if !front.open.find(n) {
                    let t = &mut front.tiles[ni];
                    t.g = tentative;
                    t.h = chebyshev(n_pos, target);
                    t.parent = Some(current);
                    front.open.add(n, &front.tiles);
                } else if tentative < front.tiles[ni].g {
                    let t = &mut front.tiles[ni];
                    t.g = tentative;
                    t.parent = Some(current);
                    front.open.decrease_key(n, &front.tiles);
                }
            }
        };

        let path = if found {
            let mut path = Vec::new();
            let mut cur = Some(target_ref);
            while let Some(r) = cur {
                let t = &front.tiles[r.index()];
                path.push(t.pos());
                cur = t.parent;
            }
            path.reverse();
            path
        } else {
            Vec::new()
        };
        front.cleanup();

        debug!(
            "pathing: {start} -> {target}: {} after {} expansions",
            if found { "found" } else { "exhausted" },
            self.expanded
        );
        path
    }
}
