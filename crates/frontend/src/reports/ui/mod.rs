pub mod funnel;
