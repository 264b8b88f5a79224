mod age_bracket;
mod contract;
mod event;
mod user;
mod venue;
