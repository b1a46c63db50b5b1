mod ascii;
