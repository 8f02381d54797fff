extern crate dot;

use std::io;
use std::io::Write;

use crate::expr::Expr;

/// Expression tree laid out for GraphViz rendering.
///
/// Nodes are numbered in pre-order; every node of the tree gets its own vertex,
/// so repeated identifiers appear once per occurrence.
pub struct ExprGraph {
    labels: Vec<String>,
    edges: Vec<GraphEdge>,
}

type GraphNode = usize;
type GraphEdge = (usize, String, usize);

impl ExprGraph {
    pub fn new(root: &Expr) -> Self {
        let mut graph = Self {
            labels: Vec::with_capacity(root.size()),
            edges: Vec::new(),
        };
        graph.walk(root);
        graph
    }

    pub fn render_dot<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        dot::render(self, writer)
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn walk(&mut self, node: &Expr) -> GraphNode {
        let id = self.labels.len();

        match node {
            Expr::Var(v) => self.labels.push(format!("Var {v}")),
            Expr::Not(f) => {
                self.labels.push("Not".to_string());
                let child = self.walk(f);
                self.edges.push((id, String::new(), child));
            }
            Expr::BinaryOp(op, l, r) => {
                self.labels.push(format!("{op:?}"));
                let left = self.walk(l);
                self.edges.push((id, "L".to_string(), left));
                let right = self.walk(r);
                self.edges.push((id, "R".to_string(), right));
            }
        }

        id
    }
}

impl<'a> dot::Labeller<'a, GraphNode, GraphEdge> for ExprGraph {
    fn graph_id(&self) -> dot::Id<'a> {
        dot::Id::new("expression").expect("cannot create Id named 'expression'")
    }

    fn node_id(&self, n: &GraphNode) -> dot::Id<'a> {
        dot::Id::new(format!("n_{n}")).unwrap_or_else(|_| panic!("cannot create Id named 'n_{n}'"))
    }

    fn node_label(&self, n: &GraphNode) -> dot::LabelText<'a> {
        dot::LabelText::label(self.labels[*n].clone())
    }

    fn edge_label(&self, e: &GraphEdge) -> dot::LabelText<'a> {
        dot::LabelText::label(e.1.clone())
    }
}

impl<'a> dot::GraphWalk<'a, GraphNode, GraphEdge> for ExprGraph {
    fn nodes(&self) -> dot::Nodes<'a, GraphNode> {
        (0..self.labels.len()).collect()
    }

    fn edges(&self) -> dot::Edges<'a, GraphEdge> {
        self.edges.clone().into()
    }

    fn source(&self, e: &GraphEdge) -> GraphNode {
        e.0
    }

    fn target(&self, e: &GraphEdge) -> GraphNode {
        e.2
    }
}
