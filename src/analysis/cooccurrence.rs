use crate::core::graph::{Graph, GraphBuilder};
use crate::core::ids::{NodeId, NodeRegistry};
use crate::core::post::Post;
use std::collections::HashMap;

/// Authors connected whenever two of their posts share a hashtag.
pub struct UserGraph {
    pub registry: NodeRegistry,
    pub graph: Graph,
}

/// Builds the hashtag co-occurrence graph through an inverted index
/// (hashtag -> authors) rather than comparing every pair of posts.
pub fn build_user_graph(posts: &[Post]) -> UserGraph {
    let mut registry = NodeRegistry::new();
    let mut tag_index: HashMap<&str, Vec<NodeId>> = HashMap::new();

    for post in posts {
        let author = registry.get_or_insert(&post.user);
        for tag in &post.hashtags {
            let authors = tag_index.entry(tag.as_str()).or_default();
            // a post listing the same tag twice is still a single occurrence
            if authors.last() != Some(&author) {
                authors.push(author);
            }
        }
    }

    let mut builder = GraphBuilder::new(registry.len());
    for authors in tag_index.values() {
        for (i, u) in authors.iter().enumerate() {
            for v in &authors[i + 1..] {
                builder.add_edge(*u, *v);
            }
        }
    }

    UserGraph {
        registry,
        graph: builder.freeze(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::synthetic::{config, generate, post};

    #[test]
    fn test_empty_batch() {
        let ug = build_user_graph(&[]);
        assert_eq!(0, ug.graph.node_count());
        assert_eq!(0, ug.graph.edge_count());
    }

    #[test]
    fn test_disjoint_hashtags_have_no_edges() {
        let posts = vec![
            post("alice", &["#a"]),
            post("bob", &["#b"]),
            post("carol", &[]),
        ];
        let ug = build_user_graph(&posts);

        assert_eq!(3, ug.graph.node_count());
        assert_eq!(0, ug.graph.edge_count());
    }

    #[test]
    fn test_shared_hashtag_connects_authors() {
        let posts = vec![
            post("alice", &["#a", "#x"]),
            post("bob", &["#b", "#x"]),
            post("carol", &["#b"]),
        ];
        let ug = build_user_graph(&posts);

        let alice = ug.registry.get("alice").unwrap();
        let bob = ug.registry.get("bob").unwrap();
        let carol = ug.registry.get("carol").unwrap();
        assert_eq!(&[bob], ug.graph.neighbors(alice));
        assert_eq!(&[alice, carol], ug.graph.neighbors(bob));
        assert_eq!(2, ug.graph.edge_count());
    }

    #[test]
    fn test_multiple_shared_tags_make_one_edge() {
        let posts = vec![post("alice", &["#a", "#b"]), post("bob", &["#a", "#b"])];
        let ug = build_user_graph(&posts);

        assert_eq!(1, ug.graph.edge_count());
    }

    #[test]
    fn test_same_author_posts_no_self_loop() {
        let posts = vec![
            post("alice", &["#a"]),
            post("alice", &["#a", "#a"]),
            post("bob", &["#c"]),
        ];
        let ug = build_user_graph(&posts);

        assert_eq!(2, ug.graph.node_count());
        assert_eq!(0, ug.graph.edge_count());
    }

    #[test]
    fn test_synthetic_batch_is_complete() {
        let posts = generate(&config(10)).collect::<Vec<_>>();
        let ug = build_user_graph(&posts);

        assert_eq!(10, ug.graph.node_count());
        assert_eq!(45, ug.graph.edge_count());
        assert_eq!("user_0", ug.registry.name(0));
    }
}
