mod booking;
mod item;
mod request;
