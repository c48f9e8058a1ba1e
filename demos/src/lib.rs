//! Shared helpers for the gridroute command-line demo.
//!
//! Renders a solved grid as plain text and parses `X,Y` coordinates from the
//! command line.

use gridroute_core::{Grid, Point};
use gridroute_paths::SearchOutcome;

/// Text rendering of a grid and its search outcome, one row per line.
///
/// `S` start, `G` goal, `#` obstacle, `*` route, `+` expanded but off the
/// route, `.` untouched open cell.
pub fn render(grid: &Grid, outcome: &SearchOutcome) -> String {
    let route: &[Point] = outcome
        .route
        .as_ref()
        .map(|r| r.points.as_slice())
        .unwrap_or(&[]);

    let mut out = String::new();
    for x in 0..grid.size() {
        for y in 0..grid.size() {
            let p = Point::new(x, y);
            let Some(cell) = grid.cell(p) else {
                continue;
            };
            let ch = if cell.is_start {
                'S'
            } else if cell.is_goal {
                'G'
            } else if cell.is_obstacle {
                '#'
            } else if route.contains(&p) {
                '*'
            } else if outcome.visited.contains(&p) {
                '+'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// One-line summary of a search outcome.
pub fn summary(outcome: &SearchOutcome) -> String {
    match &outcome.route {
        Some(route) => format!(
            "route found: {} moves, cost {}, {} cells expanded",
            route.steps(),
            route.cost,
            outcome.visited.len()
        ),
        None => format!("no route found, {} cells expanded", outcome.visited.len()),
    }
}

/// Parse a coordinate written as `X,Y`.
pub fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| "expected format X,Y".to_string())?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|error| format!("invalid x: {error}"))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|error| format!("invalid y: {error}"))?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_paths::find_route;

    #[test]
    fn render_marks_route_and_obstacles() {
        let mut g = Grid::new(3, Point::new(0, 0), Point::new(2, 2)).unwrap();
        g.set_obstacle(Point::new(1, 1), true).unwrap();
        let out = find_route(&g);
        let text = render(&g, &out);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 3));
        assert_eq!(rows[0], "S**");
        assert_eq!(&rows[1][1..], "#*");
        assert_eq!(&rows[2][2..], "G");
    }

    #[test]
    fn summary_reports_both_outcomes() {
        let g = Grid::new(3, Point::new(0, 0), Point::new(2, 2)).unwrap();
        let s = summary(&find_route(&g));
        assert!(s.starts_with("route found: 4 moves, cost 4"));
        assert_eq!(
            summary(&SearchOutcome::default()),
            "no route found, 0 cells expanded"
        );
    }

    #[test]
    fn parse_point_accepts_x_comma_y() {
        assert_eq!(parse_point("3, 4"), Ok(Point::new(3, 4)));
        assert!(parse_point("3x4").is_err());
        assert!(parse_point("a,1").is_err());
    }
}
