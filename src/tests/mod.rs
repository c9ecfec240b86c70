mod expression_tests;
