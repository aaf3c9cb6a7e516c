mod api;
mod middleware;
