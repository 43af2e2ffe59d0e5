mod pull_request;
