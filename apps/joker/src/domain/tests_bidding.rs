use crate::domain::bidding::{dealer_excluded_bid, legal_bids, validate_bid, Bid, Bidding};
use crate::domain::rules::GameConfig;
use crate::errors::domain::ValidationKind;

#[test]
fn bids_outside_range_are_rejected() {
    let config = GameConfig::standard();
    let err = validate_bid(10, None, &config).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::InvalidBid));
    assert_eq!(err.to_string(), "Your bid should be between 0 and 9.");
    assert_eq!(validate_bid(9, None, &config).unwrap(), Bid(9));
    assert_eq!(validate_bid(0, None, &config).unwrap(), Bid(0));
}

#[test]
fn excluded_value_uses_other_three_bids_only() {
    let config = GameConfig::standard();
    assert_eq!(dealer_excluded_bid(&[2, 3, 1], &config), Some(3));
    assert_eq!(dealer_excluded_bid(&[0, 0, 0], &config), Some(9));
    assert_eq!(dealer_excluded_bid(&[3, 3, 3], &config), Some(0));
    assert_eq!(dealer_excluded_bid(&[5, 5, 0], &config), None);
}

#[test]
fn legal_bids_skip_the_exclusion() {
    let config = GameConfig::standard();
    assert_eq!(legal_bids(None, &config).len(), 10);
    let bids = legal_bids(Some(4), &config);
    assert_eq!(bids.len(), 9);
    assert!(!bids.contains(&4));
}

#[test]
fn dealer_bids_last_and_cannot_make_the_total_nine() {
    let mut bidding = Bidding::new(1, GameConfig::standard());
    assert_eq!(bidding.dealer(), 0);

    for (seat, bid) in [(1, 2), (2, 3), (3, 1)] {
        assert_eq!(bidding.next_bidder(), Some(seat));
        assert_eq!(bidding.exclusion_for(seat), None);
        bidding.place_bid(seat, Bid(bid)).unwrap();
    }
    assert_eq!(bidding.next_bidder(), Some(0));
    assert_eq!(bidding.exclusion_for(0), Some(3));

    let err = bidding.place_bid(0, Bid(3)).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::InvalidBid));
    assert_eq!(
        err.to_string(),
        "You can place any bid between 0 and 9 except 3."
    );
    // A rejected attempt leaves the exclusion unchanged.
    assert_eq!(bidding.exclusion_for(0), Some(3));

    bidding.place_bid(0, Bid(4)).unwrap();
    assert_eq!(bidding.finished(), Some([4, 2, 3, 1]));
    assert_eq!(bidding.next_bidder(), None);
}

#[test]
fn out_of_turn_and_extra_bids_are_rejected() {
    let mut bidding = Bidding::new(0, GameConfig::standard());
    let err = bidding.place_bid(2, Bid(1)).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::OutOfTurn));

    for seat in 0..3 {
        bidding.place_bid(seat, Bid(0)).unwrap();
    }
    assert!(bidding.finished().is_none());
    bidding.place_bid(3, Bid(0)).unwrap();

    let err = bidding.place_bid(0, Bid(1)).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PhaseMismatch));
}
