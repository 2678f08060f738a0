mod shuffle_tests;
