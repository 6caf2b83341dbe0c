pub mod centrality;
pub mod community;
pub mod cooccurrence;
pub mod engagement;
pub mod greedy_modularity;
pub mod label_propagation;
pub mod narrative;
pub mod network;
pub mod report;
