pub mod census_report;
pub mod connected_components;
pub mod global_triangle_count;
pub mod local_clustering_coefficient;
pub mod local_triangle_count;
pub mod triad_classifier;
pub mod triadic_census;
pub mod triadic_profile;
