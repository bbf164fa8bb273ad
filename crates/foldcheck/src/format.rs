//! Line-oriented text format for problems and solutions.
//!
//! Format
//! - Vertex: `x,y`, each coordinate `a` or `a/b` (decimal, optional sign).
//!   Coordinates are reduced while reading so that vertex `==` is point
//!   equality.
//! - Problem: polygon count; per polygon a vertex count and that many vertex
//!   lines; skeleton edge count and that many `x1,y1 x2,y2` lines.
//! - Solution: source vertex count and vertex lines; facet count and lines
//!   `k i1 .. ik` (vertex count, then source indices); one destination vertex
//!   line per source vertex.
//! - Blank lines and surrounding whitespace are ignored. Anything after the
//!   last expected line is an error.
//!
//! Code cross-refs: `validate::{Problem, Solution}`, `error::ParseError`

use tracing::debug;

use crate::error::ParseError;
use crate::geom::{Edge, Polygon, Vertex};
use crate::rational::Rational;
use crate::validate::{Problem, Solution};

/// Read a problem. Polygons are split into positive and negative sets by
/// orientation, in file order.
pub fn parse_problem(text: &str) -> Result<Problem, ParseError> {
    let mut cur = Cursor::new(text);
    let n_polys = cur.count("polygon count")?;
    let polygons = (0..n_polys)
        .map(|_| {
            let n_verts = cur.count("polygon vertex count")?;
            let vertices = (0..n_verts)
                .map(|_| cur.vertex())
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Polygon::new(vertices))
        })
        .collect::<Result<Vec<_>, ParseError>>()?;
    let n_edges = cur.count("skeleton edge count")?;
    let skeleton = (0..n_edges)
        .map(|_| cur.edge())
        .collect::<Result<Vec<_>, _>>()?;
    cur.finish()?;
    let problem = Problem::from_polygons(polygons, skeleton);
    debug!(
        positive = problem.pos_polys.len(),
        negative = problem.neg_polys.len(),
        skeleton = problem.skeleton.len(),
        "parsed problem"
    );
    Ok(problem)
}

/// Read a solution. Facet indices are resolved against the source vertices.
pub fn parse_solution(text: &str) -> Result<Solution, ParseError> {
    let mut cur = Cursor::new(text);
    let n_verts = cur.count("source vertex count")?;
    let source = (0..n_verts)
        .map(|_| cur.vertex())
        .collect::<Result<Vec<_>, _>>()?;
    let n_facets = cur.count("facet count")?;
    let facets = (0..n_facets)
        .map(|_| cur.facet(&source))
        .collect::<Result<Vec<_>, _>>()?;
    let destination = (0..n_verts)
        .map(|_| cur.vertex())
        .collect::<Result<Vec<_>, _>>()?;
    cur.finish()?;
    debug!(
        vertices = source.len(),
        facets = facets.len(),
        "parsed solution"
    );
    Ok(Solution::new(source, facets, destination))
}

/// Write a solution in the same format. `None` when a facet vertex does not
/// occur in `source`.
pub fn write_solution(solution: &Solution) -> Option<String> {
    let mut out = String::new();
    let mut line = |s: String| {
        out.push_str(&s);
        out.push('\n');
    };
    line(solution.source.len().to_string());
    for v in &solution.source {
        line(v.to_string());
    }
    line(solution.facets.len().to_string());
    for f in &solution.facets {
        let mut parts = vec![f.len().to_string()];
        for v in &f.vertices {
            parts.push(solution.source.iter().position(|s| s == v)?.to_string());
        }
        line(parts.join(" "));
    }
    for v in &solution.destination {
        line(v.to_string());
    }
    Some(out)
}

fn parse_vertex(line: usize, text: &str) -> Result<Vertex, ParseError> {
    let (x, y) = text.split_once(',').ok_or_else(|| ParseError::InvalidVertex {
        line,
        text: text.to_string(),
    })?;
    // A zero numerator keeps its denominator under reduction; pin it to 0/1
    // here so that equal points compare equal.
    let coord = |c: &str| {
        c.parse::<Rational>()
            .map(|r| if r.is_zero() { Rational::zero() } else { r })
            .map_err(|source| ParseError::InvalidCoordinate {
                line,
                text: text.to_string(),
                source,
            })
    };
    Ok(Vertex::new(coord(x)?, coord(y)?))
}

fn parse_index(line: usize, token: &str) -> Result<usize, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidCount {
        line,
        text: token.to_string(),
    })
}

/// Non-blank lines with their 1-based line numbers.
struct Cursor<'a> {
    lines: Vec<(usize, &'a str)>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect();
        Self { lines, pos: 0 }
    }

    fn next(&mut self, expected: &'static str) -> Result<(usize, &'a str), ParseError> {
        match self.lines.get(self.pos) {
            Some(&entry) => {
                self.pos += 1;
                Ok(entry)
            }
            None => Err(ParseError::UnexpectedEof {
                line: self.lines.last().map_or(1, |&(n, _)| n + 1),
                expected,
            }),
        }
    }

    fn count(&mut self, expected: &'static str) -> Result<usize, ParseError> {
        let (line, text) = self.next(expected)?;
        parse_index(line, text)
    }

    fn vertex(&mut self) -> Result<Vertex, ParseError> {
        let (line, text) = self.next("vertex")?;
        parse_vertex(line, text)
    }

    fn edge(&mut self) -> Result<Edge, ParseError> {
        let (line, text) = self.next("edge")?;
        let mut tokens = text.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(a), Some(b), None) => {
                Ok(Edge::new(parse_vertex(line, a)?, parse_vertex(line, b)?))
            }
            _ => Err(ParseError::InvalidEdge {
                line,
                text: text.to_string(),
            }),
        }
    }

    fn facet(&mut self, source: &[Vertex]) -> Result<Polygon, ParseError> {
        let (line, text) = self.next("facet")?;
        let mut tokens = text.split_whitespace();
        let declared = parse_index(line, tokens.next().unwrap_or(""))?;
        let indices = tokens
            .map(|t| parse_index(line, t))
            .collect::<Result<Vec<_>, _>>()?;
        if indices.len() != declared {
            return Err(ParseError::FacetLength {
                line,
                declared,
                found: indices.len(),
            });
        }
        let vertices = indices
            .into_iter()
            .map(|index| {
                source.get(index).cloned().ok_or(ParseError::FacetIndex {
                    line,
                    index,
                    len: source.len(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Polygon::new(vertices))
    }

    fn finish(self) -> Result<(), ParseError> {
        match self.lines.get(self.pos) {
            Some(&(line, text)) => Err(ParseError::TrailingInput {
                line,
                text: text.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseRationalError;
    use crate::validate::{problem_area, validate};

    const SQUARE_PROBLEM: &str = "\
1
4
0,0
1,0
1,1
0,1
4
0,0 1,0
0,0 0,1
1,0 1,1
0,1 1,1
";

    const SQUARE_SOLUTION: &str = "\
4
0,0
1,0
1,1
0,1
1
4 0 1 2 3
0,0
1,0
1,1
0,1
";

    #[test]
    fn reads_unit_square_problem() {
        let p = parse_problem(SQUARE_PROBLEM).unwrap();
        assert_eq!(p.pos_polys.len(), 1);
        assert_eq!(p.skeleton.len(), 4);
        assert_eq!(p.skeleton[3], Edge::new(Vertex::int(0, 1), Vertex::int(1, 1)));
        assert_eq!(problem_area(&p), Rational::one());
    }

    #[test]
    fn reads_solution_with_facets() {
        let s = parse_solution(SQUARE_SOLUTION).unwrap();
        assert_eq!(s.source.len(), 4);
        assert_eq!(s.facets.len(), 1);
        assert_eq!(s.facets[0].vertices, s.source);
        assert_eq!(s.destination, s.source);
        assert!(validate(&s));
    }

    #[test]
    fn write_then_read_solution() {
        let s = parse_solution(SQUARE_SOLUTION).unwrap();
        let text = write_solution(&s).unwrap();
        assert_eq!(text, SQUARE_SOLUTION);
    }

    #[test]
    fn coordinates_are_reduced_on_read() {
        let p = parse_problem("1\n3\n0,0\n2/4,0\n1/2,-6/-4\n0\n").unwrap();
        let vs = &p.pos_polys[0].vertices;
        assert_eq!(vs[1], Vertex::frac(1, 2, 0, 1));
        assert_eq!(vs[2], Vertex::frac(1, 2, 3, 2));
    }

    #[test]
    fn zero_coordinates_compare_equal_whatever_their_denominator() {
        let s = parse_solution("2\n0/5,0\n1,0/3\n0\n0,0\n1,0\n").unwrap();
        assert_eq!(s.source[0], Vertex::int(0, 0));
        assert_eq!(s.source[1], Vertex::int(1, 0));
    }

    #[test]
    fn negative_polygons_go_to_neg_set() {
        let text = "2\n4\n0,0\n2,0\n2,2\n0,2\n4\n1/2,1/2\n1/2,3/2\n3/2,3/2\n3/2,1/2\n0\n";
        let p = parse_problem(text).unwrap();
        assert_eq!(p.pos_polys.len(), 1);
        assert_eq!(p.neg_polys.len(), 1);
        assert_eq!(problem_area(&p), Rational::from_integer(3));
    }

    #[test]
    fn blank_lines_and_padding_are_ignored() {
        let s = parse_solution("\n 2\n0,0\n\n1,1 \n0\n0,0\n1,1\n\n").unwrap();
        assert_eq!(s.source, vec![Vertex::int(0, 0), Vertex::int(1, 1)]);
        assert!(s.facets.is_empty());
    }

    #[test]
    fn errors_name_the_line() {
        assert_eq!(
            parse_problem("1\n3\n0,0\n1,0\n").unwrap_err(),
            ParseError::UnexpectedEof {
                line: 5,
                expected: "vertex"
            }
        );
        assert_eq!(
            parse_problem("x\n").unwrap_err(),
            ParseError::InvalidCount {
                line: 1,
                text: "x".into()
            }
        );
        assert_eq!(
            parse_solution("1\n0;0\n").unwrap_err(),
            ParseError::InvalidVertex {
                line: 2,
                text: "0;0".into()
            }
        );
        assert_eq!(
            parse_solution("1\n1/0,0\n").unwrap_err(),
            ParseError::InvalidCoordinate {
                line: 2,
                text: "1/0,0".into(),
                source: ParseRationalError::ZeroDenominator,
            }
        );
        assert!(matches!(
            parse_problem("0\n1\n0,0\n").unwrap_err(),
            ParseError::InvalidEdge { line: 3, .. }
        ));
    }

    #[test]
    fn huge_counts_run_out_of_input() {
        assert_eq!(
            parse_problem("18446744073709551615\n").unwrap_err(),
            ParseError::UnexpectedEof {
                line: 2,
                expected: "polygon vertex count"
            }
        );
        assert_eq!(
            parse_problem("100000000000000000\n4\n").unwrap_err(),
            ParseError::UnexpectedEof {
                line: 3,
                expected: "vertex"
            }
        );
        assert!(matches!(
            parse_solution("18446744073709551615\n0,0\n").unwrap_err(),
            ParseError::UnexpectedEof { line: 3, .. }
        ));
    }

    #[test]
    fn facet_errors() {
        assert_eq!(
            parse_solution("2\n0,0\n1,0\n1\n3 0 1\n0,0\n1,0\n").unwrap_err(),
            ParseError::FacetLength {
                line: 5,
                declared: 3,
                found: 2
            }
        );
        assert_eq!(
            parse_solution("2\n0,0\n1,0\n1\n2 0 5\n0,0\n1,0\n").unwrap_err(),
            ParseError::FacetIndex {
                line: 5,
                index: 5,
                len: 2
            }
        );
    }

    #[test]
    fn trailing_input_is_rejected() {
        assert_eq!(
            parse_problem("0\n0\nextra\n").unwrap_err(),
            ParseError::TrailingInput {
                line: 3,
                text: "extra".into()
            }
        );
    }
}
