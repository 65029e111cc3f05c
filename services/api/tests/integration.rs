mod helpers;
mod invite_test;
mod register_test;
mod session_test;
