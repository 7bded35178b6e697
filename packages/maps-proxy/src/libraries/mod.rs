pub mod route_format;
