mod pull_request;
mod stats;
