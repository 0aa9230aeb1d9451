mod helpers;

mod checkin_test;
mod recommendation_test;
mod registration_test;
