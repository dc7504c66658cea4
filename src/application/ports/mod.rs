// src/application/ports/mod.rs
pub mod images;
pub mod routing;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type RouteResolverPort = dyn routing::RouteResolver;
pub type ImageStyleRegistryPort = dyn images::ImageStyleRegistry;
pub type FileUrlGeneratorPort = dyn images::FileUrlGenerator;
